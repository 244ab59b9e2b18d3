use super::response::QueryResponse;
use crate::shared::api_reply::{classify_reply, ApiReply};

/// Итог одного вопроса к бэкенду
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Answered(QueryResponse),
    /// Non-2xx reply; `error` is the server message when it sent a non-empty one
    Rejected { error: Option<String> },
    /// Transport failure, unreadable body, or a 2xx body without `answer`
    Failed { message: String },
}

impl QueryOutcome {
    pub fn from_http(ok: bool, body: &str) -> Self {
        match classify_reply::<QueryResponse>(ok, body) {
            ApiReply::Success(data) => QueryOutcome::Answered(data),
            ApiReply::Rejected(err) => QueryOutcome::Rejected {
                error: err.message().map(str::to_string),
            },
            ApiReply::Broken(message) => QueryOutcome::Failed { message },
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        QueryOutcome::Failed {
            message: message.into(),
        }
    }
}
