use crate::shared::rag_backend::RagBackend;
use contracts::usecases::u601_upload_documents::UploadOutcome;

/// API клиент для UseCase u601: одна попытка загрузки, без повторов.
///
/// Never fails: transport errors and unreadable replies come back as
/// [`UploadOutcome::Failed`].
pub async fn upload_documents<B: RagBackend>(backend: &B, files: Vec<B::File>) -> UploadOutcome {
    log::info!("u601: uploading {} file(s)", files.len());

    let outcome = match backend.upload(files).await {
        Ok(reply) => {
            let outcome = UploadOutcome::from_http(reply.ok, &reply.body);
            if !outcome.is_success() {
                log::warn!("u601: upload not accepted (HTTP {})", reply.status);
            }
            outcome
        }
        Err(e) => {
            log::error!("u601: upload request failed: {}", e);
            UploadOutcome::failed(e.to_string())
        }
    };

    if let UploadOutcome::Uploaded(data) = &outcome {
        log::info!(
            "u601: {} document(s) accepted, {} in index",
            data.uploaded.len(),
            data.total_docs
        );
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::rag_backend::mock::MockRagBackend;
    use crate::shared::rag_backend::TransportError;
    use crate::usecases::u601_upload_documents::state::{SelectedFile, UploadState};

    /// Same sequence the view model runs on Submit
    async fn submit(state: &mut UploadState<String>, backend: &MockRagBackend) {
        if let Ok((token, files)) = state.begin_submit() {
            let outcome = upload_documents(backend, files).await;
            state.settle(token, &outcome);
        }
    }

    #[tokio::test]
    async fn test_upload_success() {
        let backend = MockRagBackend::replying(
            200,
            r#"{"status":"ok","uploaded":[{"doc_id":"1","filename":"a.txt"}],"total_docs":4}"#,
        );

        let outcome = upload_documents(&backend, vec!["a.txt".to_string()]).await;

        match outcome {
            UploadOutcome::Uploaded(data) => {
                assert_eq!(data.uploaded.len(), 1);
                assert_eq!(data.total_docs, 4);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(*backend.uploads.borrow(), vec![vec!["a.txt".to_string()]]);
    }

    #[tokio::test]
    async fn test_upload_server_error() {
        let backend = MockRagBackend::replying(500, r#"{"error":"index unavailable"}"#);

        let outcome = upload_documents(&backend, vec!["a.txt".to_string()]).await;

        assert_eq!(
            outcome,
            UploadOutcome::Rejected {
                error: Some("index unavailable".to_string())
            }
        );
    }

    #[tokio::test]
    async fn test_upload_network_failure() {
        let backend =
            MockRagBackend::failing(TransportError::Network("Failed to fetch".to_string()));

        let outcome = upload_documents(&backend, vec!["a.txt".to_string()]).await;

        assert_eq!(outcome, UploadOutcome::failed("Failed to fetch"));
    }

    #[tokio::test]
    async fn test_upload_html_error_page() {
        let backend = MockRagBackend::replying(502, "<html>Bad Gateway</html>");

        let outcome = upload_documents(&backend, vec!["a.txt".to_string()]).await;

        assert!(matches!(outcome, UploadOutcome::Failed { .. }));
    }

    #[tokio::test]
    async fn test_submit_without_files_sends_nothing() {
        let backend = MockRagBackend::replying(200, r#"{"uploaded":[],"total_docs":0}"#);
        let mut state = UploadState::new();

        submit(&mut state, &backend).await;

        assert!(backend.uploads.borrow().is_empty());
        assert_eq!(state.status().message(), "Please select files to upload");
    }

    #[tokio::test]
    async fn test_submit_while_uploading_sends_nothing() {
        let backend = MockRagBackend::replying(200, r#"{"uploaded":["a.txt"],"total_docs":1}"#);
        let mut state = UploadState::new();
        state.select_files(vec![SelectedFile::new("a.txt", "a.txt".to_string())]);

        let (token, _files) = state.begin_submit().unwrap();
        submit(&mut state, &backend).await;
        assert!(backend.uploads.borrow().is_empty());

        state.settle(token, &UploadOutcome::Rejected { error: None });
        submit(&mut state, &backend).await;

        assert_eq!(backend.uploads.borrow().len(), 1);
        assert!(state.selection().is_empty());
        assert_eq!(
            state.status().message(),
            "✅ Successfully uploaded 1 file(s). Total documents: 1"
        );
    }
}
