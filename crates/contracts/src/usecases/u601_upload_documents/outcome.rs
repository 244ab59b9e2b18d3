use super::response::UploadResponse;
use crate::shared::api_reply::{classify_reply, ApiReply};

/// Итог одной попытки загрузки файлов
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Uploaded(UploadResponse),
    /// Non-2xx reply; `error` is the server message when it sent a non-empty one
    Rejected { error: Option<String> },
    /// Transport failure, unreadable body, or a 2xx body of the wrong shape
    Failed { message: String },
}

impl UploadOutcome {
    pub fn from_http(ok: bool, body: &str) -> Self {
        match classify_reply::<UploadResponse>(ok, body) {
            ApiReply::Success(data) => UploadOutcome::Uploaded(data),
            ApiReply::Rejected(err) => UploadOutcome::Rejected {
                error: err.message().map(str::to_string),
            },
            ApiReply::Broken(message) => UploadOutcome::Failed { message },
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        UploadOutcome::Failed {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Uploaded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_success_reply() {
        let body = r#"{
            "status": "ok",
            "uploaded": [
                {"doc_id": "a1", "filename": "notes.md"},
                {"doc_id": "b2", "source": "text_field"}
            ],
            "total_docs": 12
        }"#;

        match UploadOutcome::from_http(true, body) {
            UploadOutcome::Uploaded(data) => {
                assert_eq!(data.uploaded.len(), 2);
                assert_eq!(data.total_docs, 12);
                assert_eq!(data.uploaded[0].filename(), Some("notes.md"));
                assert_eq!(data.uploaded[1].source(), Some("text_field"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_any_uploaded_element_shape_counts() {
        let outcome =
            UploadOutcome::from_http(true, r#"{"uploaded": ["a.txt", "b.pdf"], "total_docs": 2}"#);
        match outcome {
            UploadOutcome::Uploaded(data) => {
                assert_eq!(data.uploaded.len(), 2);
                assert_eq!(data.uploaded[0].filename(), None);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        let outcome =
            UploadOutcome::from_http(true, r#"{"uploaded": [{"filename": "a.txt"}, 7], "total_docs": 9}"#);
        match outcome {
            UploadOutcome::Uploaded(data) => {
                assert_eq!(data.uploaded.len(), 2);
                assert_eq!(data.uploaded[0].filename(), Some("a.txt"));
                assert_eq!(data.total_docs, 9);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_success_without_uploaded_field_fails() {
        let outcome = UploadOutcome::from_http(true, r#"{"total_docs": 3}"#);
        assert!(matches!(outcome, UploadOutcome::Failed { .. }));
    }

    #[test]
    fn test_rejection_keeps_server_message() {
        assert_eq!(
            UploadOutcome::from_http(false, r#"{"error": "disk full"}"#),
            UploadOutcome::Rejected {
                error: Some("disk full".to_string())
            }
        );
        assert_eq!(
            UploadOutcome::from_http(false, "{}"),
            UploadOutcome::Rejected { error: None }
        );
    }
}
