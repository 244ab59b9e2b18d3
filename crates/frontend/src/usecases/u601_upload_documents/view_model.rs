//! Upload Documents - View Model

use super::api::upload_documents;
use super::state::{SelectedFile, UploadRejected, UploadState};
use crate::shared::rag_backend::RagBackend;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

#[derive(Clone, Copy)]
pub struct UploadDocumentsVm {
    /// `File` handles are not `Send`, so the state lives in local storage
    pub state: RwSignal<UploadState<web_sys::File>, LocalStorage>,
}

impl UploadDocumentsVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new_local(UploadState::new()),
        }
    }

    pub fn file_names(&self) -> Vec<String> {
        self.state.with(|s| s.file_names())
    }

    pub fn status_message(&self) -> String {
        self.state.with(|s| s.status().message())
    }

    pub fn is_uploading(&self) -> bool {
        self.state.with(|s| s.is_uploading())
    }

    /// Take whatever the file picker currently holds as the new selection
    pub fn select_from_input(&self, input: &HtmlInputElement) {
        let files: Vec<SelectedFile<web_sys::File>> = input
            .files()
            .map(|list| {
                (0..list.length())
                    .filter_map(|i| list.get(i))
                    .map(|file| SelectedFile::new(file.name(), file))
                    .collect()
            })
            .unwrap_or_default();
        self.state.update(|s| s.select_files(files));
    }

    pub fn reset(&self) {
        self.state.update(|s| s.reset());
    }

    pub fn submit<B>(&self, backend: B)
    where
        B: RagBackend<File = web_sys::File> + 'static,
    {
        let state = self.state;
        match state.try_update(|s| s.begin_submit()) {
            Some(Ok((token, files))) => spawn_local(async move {
                let outcome = upload_documents(&backend, files).await;
                // Панель могла быть размонтирована, пока шёл запрос
                let _ = state.try_update(|s| s.settle(token, &outcome));
            }),
            Some(Err(UploadRejected::NothingSelected)) => {
                log::debug!("u601: submit without selected files");
            }
            Some(Err(UploadRejected::Busy)) => {
                log::debug!("u601: submit ignored, upload in progress");
            }
            None => {}
        }
    }
}
