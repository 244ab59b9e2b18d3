pub mod outcome;
pub mod response;

pub use outcome::UploadOutcome;
pub use response::{UploadResponse, UploadedDocument, UploadedRecord};

use crate::usecases::common::UseCaseMetadata;

/// Multipart field name repeated once per uploaded file
pub const FILES_FIELD: &str = "files";

pub struct UploadDocuments;

impl UseCaseMetadata for UploadDocuments {
    fn display_name() -> &'static str {
        "Upload Documents"
    }

    fn description() -> &'static str {
        "Add local files to the document index used for answering questions"
    }

    fn endpoint() -> &'static str {
        "/upload"
    }
}
