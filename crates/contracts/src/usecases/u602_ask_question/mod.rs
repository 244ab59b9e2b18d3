pub mod outcome;
pub mod request;
pub mod response;

pub use outcome::QueryOutcome;
pub use request::{QueryRequest, DEFAULT_MODEL, DEFAULT_TOP_K};
pub use response::{QueryResponse, RetrievedSource};

use crate::usecases::common::UseCaseMetadata;

pub struct AskQuestion;

impl UseCaseMetadata for AskQuestion {
    fn display_name() -> &'static str {
        "RAG Chat Assistant"
    }

    fn description() -> &'static str {
        "Ask questions about your uploaded documents"
    }

    fn endpoint() -> &'static str {
        "/query"
    }
}
