/// Метаданные UseCase для отображения в UI и маршрутизации
pub trait UseCaseMetadata {
    /// Отображаемое имя для UI
    fn display_name() -> &'static str;

    /// Описание UseCase
    fn description() -> &'static str {
        ""
    }

    /// Backend route relative to the API base URL, e.g. "/upload"
    fn endpoint() -> &'static str;
}
