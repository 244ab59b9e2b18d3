use crate::shared::rag_backend::RagBackend;
use contracts::usecases::u602_ask_question::{QueryOutcome, QueryRequest};

/// API клиент для UseCase u602: один вопрос, без повторов и таймаута.
///
/// Never fails: transport errors and unreadable replies come back as
/// [`QueryOutcome::Failed`].
pub async fn ask_question<B: RagBackend>(backend: &B, request: &QueryRequest) -> QueryOutcome {
    log::info!(
        "u602: asking ({} chars, top_k={}, model={})",
        request.question.chars().count(),
        request.top_k,
        request.model
    );

    match backend.query(request).await {
        Ok(reply) => {
            let outcome = QueryOutcome::from_http(reply.ok, &reply.body);
            if !matches!(outcome, QueryOutcome::Answered(_)) {
                log::warn!("u602: no answer (HTTP {})", reply.status);
            }
            outcome
        }
        Err(e) => {
            log::error!("u602: query request failed: {}", e);
            QueryOutcome::failed(e.to_string())
        }
    }
}
