//! Upload panel state machine, independent of the DOM.

use crate::shared::submit_gate::{InFlight, Settlement, SubmitGate, SubmitPhase};
use contracts::usecases::u601_upload_documents::UploadOutcome;

/// File picked by the user: display name plus the handle given to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<H> {
    pub name: String,
    pub handle: H,
}

impl<H> SelectedFile<H> {
    pub fn new(name: impl Into<String>, handle: H) -> Self {
        Self {
            name: name.into(),
            handle,
        }
    }
}

/// Итог последней попытки загрузки (перезаписывается каждой попыткой)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UploadStatus {
    #[default]
    None,
    NothingSelected,
    Uploading,
    Uploaded { count: usize, total_docs: u64 },
    Rejected { error: Option<String> },
    Failed { message: String },
}

impl UploadStatus {
    /// Text shown under the selection; empty when there was no attempt yet
    pub fn message(&self) -> String {
        match self {
            UploadStatus::None => String::new(),
            UploadStatus::NothingSelected => "Please select files to upload".to_string(),
            UploadStatus::Uploading => "Uploading files...".to_string(),
            UploadStatus::Uploaded { count, total_docs } => format!(
                "✅ Successfully uploaded {} file(s). Total documents: {}",
                count, total_docs
            ),
            UploadStatus::Rejected { error } => format!(
                "❌ Upload failed: {}",
                error.as_deref().unwrap_or("Unknown error")
            ),
            UploadStatus::Failed { message } => format!("❌ Error: {}", message),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, UploadStatus::None)
    }
}

impl From<&UploadOutcome> for UploadStatus {
    fn from(outcome: &UploadOutcome) -> Self {
        match outcome {
            UploadOutcome::Uploaded(data) => UploadStatus::Uploaded {
                count: data.uploaded.len(),
                total_docs: data.total_docs,
            },
            UploadOutcome::Rejected { error } => UploadStatus::Rejected {
                error: error.clone(),
            },
            UploadOutcome::Failed { message } => UploadStatus::Failed {
                message: message.clone(),
            },
        }
    }
}

/// Почему отправка не началась
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadRejected {
    NothingSelected,
    Busy,
}

#[derive(Debug, Clone)]
pub struct UploadState<H> {
    selection: Vec<SelectedFile<H>>,
    status: UploadStatus,
    gate: SubmitGate,
}

impl<H> Default for UploadState<H> {
    fn default() -> Self {
        Self {
            selection: Vec::new(),
            status: UploadStatus::None,
            gate: SubmitGate::new(),
        }
    }
}

impl<H: Clone> UploadState<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &[SelectedFile<H>] {
        &self.selection
    }

    pub fn file_names(&self) -> Vec<String> {
        self.selection.iter().map(|f| f.name.clone()).collect()
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    pub fn phase(&self) -> SubmitPhase {
        self.gate.phase()
    }

    pub fn is_uploading(&self) -> bool {
        self.gate.is_submitting()
    }

    /// Replaces the selection wholesale and clears the last status
    pub fn select_files(&mut self, files: Vec<SelectedFile<H>>) {
        self.selection = files;
        self.status = UploadStatus::None;
    }

    /// Starts an upload of the current selection.
    ///
    /// On success returns the in-flight token together with the file handles
    /// to hand to the transport. An empty selection only sets the validation
    /// status.
    pub fn begin_submit(&mut self) -> Result<(InFlight, Vec<H>), UploadRejected> {
        if self.gate.is_submitting() {
            return Err(UploadRejected::Busy);
        }
        if self.selection.is_empty() {
            self.status = UploadStatus::NothingSelected;
            return Err(UploadRejected::NothingSelected);
        }

        let token = self.gate.try_begin().ok_or(UploadRejected::Busy)?;
        self.status = UploadStatus::Uploading;
        let handles = self.selection.iter().map(|f| f.handle.clone()).collect();
        Ok((token, handles))
    }

    pub fn settle(&mut self, token: InFlight, outcome: &UploadOutcome) {
        self.status = UploadStatus::from(outcome);
        let settlement = if outcome.is_success() {
            self.selection.clear();
            Settlement::Success
        } else {
            Settlement::Failure
        };
        self.gate.settle(token, settlement);
    }

    /// Clears selection and status whether or not an upload is running
    pub fn reset(&mut self) {
        self.selection.clear();
        self.status = UploadStatus::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u601_upload_documents::{
        UploadResponse, UploadedDocument, UploadedRecord,
    };

    fn picked(names: &[&str]) -> Vec<SelectedFile<String>> {
        names
            .iter()
            .map(|n| SelectedFile::new(*n, format!("handle:{}", n)))
            .collect()
    }

    fn uploaded(count: usize, total_docs: u64) -> UploadOutcome {
        UploadOutcome::Uploaded(UploadResponse {
            status: Some("ok".to_string()),
            uploaded: (0..count)
                .map(|i| {
                    UploadedDocument::Record(UploadedRecord {
                        doc_id: Some(format!("doc-{}", i)),
                        filename: Some(format!("f{}.txt", i)),
                        source: None,
                    })
                })
                .collect(),
            total_docs,
        })
    }

    #[test]
    fn test_empty_selection_is_rejected_locally() {
        let mut state = UploadState::<String>::new();

        assert_eq!(state.begin_submit().unwrap_err(), UploadRejected::NothingSelected);
        assert_eq!(state.status().message(), "Please select files to upload");
        assert!(!state.is_uploading());
        assert_eq!(state.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_select_replaces_and_clears_status() {
        let mut state = UploadState::new();
        let _ = state.begin_submit();
        assert!(!state.status().is_none());

        state.select_files(picked(&["a.txt", "b.pdf"]));
        state.select_files(picked(&["c.md"]));

        assert_eq!(state.file_names(), vec!["c.md".to_string()]);
        assert!(state.status().is_none());
    }

    #[test]
    fn test_successful_upload_clears_selection() {
        let mut state = UploadState::new();
        state.select_files(picked(&["a.txt", "b.pdf"]));

        let (token, handles) = state.begin_submit().unwrap();
        assert_eq!(handles, vec!["handle:a.txt".to_string(), "handle:b.pdf".to_string()]);
        assert!(state.is_uploading());
        assert_eq!(state.status().message(), "Uploading files...");

        state.settle(token, &uploaded(2, 17));

        assert!(state.selection().is_empty());
        assert!(!state.is_uploading());
        assert_eq!(
            state.status().message(),
            "✅ Successfully uploaded 2 file(s). Total documents: 17"
        );
    }

    #[test]
    fn test_rejection_shows_server_error_and_keeps_selection() {
        let mut state = UploadState::new();
        state.select_files(picked(&["a.txt"]));

        let (token, _) = state.begin_submit().unwrap();
        state.settle(
            token,
            &UploadOutcome::Rejected {
                error: Some("X".to_string()),
            },
        );

        assert_eq!(state.status().message(), "❌ Upload failed: X");
        assert_eq!(state.file_names(), vec!["a.txt".to_string()]);
        assert_eq!(state.phase(), SubmitPhase::Settled(Settlement::Failure));
    }

    #[test]
    fn test_rejection_without_error_uses_fallback() {
        let mut state = UploadState::new();
        state.select_files(picked(&["a.txt"]));

        let (token, _) = state.begin_submit().unwrap();
        state.settle(token, &UploadOutcome::Rejected { error: None });

        assert_eq!(state.status().message(), "❌ Upload failed: Unknown error");
    }

    #[test]
    fn test_transport_failure_message() {
        let mut state = UploadState::new();
        state.select_files(picked(&["a.txt"]));

        let (token, _) = state.begin_submit().unwrap();
        state.settle(token, &UploadOutcome::failed("Failed to fetch"));

        assert_eq!(state.status().message(), "❌ Error: Failed to fetch");
        assert!(!state.is_uploading());
    }

    #[test]
    fn test_second_submit_while_uploading_is_busy() {
        let mut state = UploadState::new();
        state.select_files(picked(&["a.txt"]));

        let (token, _) = state.begin_submit().unwrap();
        assert_eq!(state.begin_submit().unwrap_err(), UploadRejected::Busy);
        assert_eq!(state.status().message(), "Uploading files...");

        state.settle(token, &uploaded(1, 1));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = UploadState::new();
        state.select_files(picked(&["a.txt"]));
        let _ = state.begin_submit();

        state.reset();
        let once = (state.file_names(), state.status().clone());
        state.reset();
        let twice = (state.file_names(), state.status().clone());

        assert_eq!(once, twice);
        assert!(twice.0.is_empty());
        assert!(twice.1.is_none());
    }

    #[test]
    fn test_reset_during_upload_does_not_unlock() {
        let mut state = UploadState::new();
        state.select_files(picked(&["a.txt"]));
        let (token, _) = state.begin_submit().unwrap();

        state.reset();
        assert!(state.is_uploading());
        assert!(state.status().is_none());

        state.settle(token, &UploadOutcome::Rejected { error: None });
        assert!(!state.is_uploading());
        assert_eq!(state.status().message(), "❌ Upload failed: Unknown error");
    }
}
