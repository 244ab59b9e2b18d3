use crate::shared::config::AppConfig;
use crate::shared::rag_backend::FetchRagBackend;
use crate::usecases::u601_upload_documents::UploadDocumentsPanel;
use crate::usecases::u602_ask_question::AskQuestionPanel;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Конфигурация читается один раз и передаётся панелям явно
    let config = AppConfig::from_build_env();
    log::info!("RAG backend: {}", config.api_base_url);
    let backend = FetchRagBackend::new(&config);

    view! {
        <ConfigProvider>
            <div style="display: flex; width: 100%; min-height: 100vh; max-height: 100vh;">
                <UploadDocumentsPanel backend=backend.clone() />
                <AskQuestionPanel config=config backend=backend />
            </div>
        </ConfigProvider>
    }
}
