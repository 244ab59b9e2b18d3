//! Ask Question - View Model

use super::api::ask_question;
use super::state::{AskRejected, ChatEntry, ChatState};
use crate::shared::config::AppConfig;
use crate::shared::date_utils::now_time_label;
use crate::shared::rag_backend::RagBackend;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct AskQuestionVm {
    pub state: RwSignal<ChatState>,
    /// Текст в поле ввода
    pub question: RwSignal<String>,
    /// Raw text of the Top K field
    pub top_k_input: RwSignal<String>,
}

impl AskQuestionVm {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: RwSignal::new(ChatState::new(config.default_top_k, config.model.clone())),
            question: RwSignal::new(String::new()),
            top_k_input: RwSignal::new(config.default_top_k.to_string()),
        }
    }

    pub fn transcript(&self) -> Vec<ChatEntry> {
        self.state.with(|s| s.transcript().to_vec())
    }

    pub fn transcript_len(&self) -> usize {
        self.state.with(|s| s.transcript().len())
    }

    pub fn is_asking(&self) -> bool {
        self.state.with(|s| s.is_asking())
    }

    pub fn can_ask(&self) -> bool {
        !self.is_asking() && !self.question.with(|q| q.trim().is_empty())
    }

    pub fn apply_top_k(&self) {
        let raw = self.top_k_input.get_untracked();
        let applied = self.state.try_update(|s| s.set_top_k_from_input(&raw));
        if applied == Some(false) {
            log::debug!("u602: ignoring Top K value {:?}", raw);
        }
    }

    pub fn submit<B>(&self, backend: B)
    where
        B: RagBackend + 'static,
    {
        let state = self.state;
        let text = self.question.get_untracked();

        match state.try_update(|s| s.begin_question(&text, now_time_label())) {
            Some(Ok((token, request))) => {
                self.question.set(String::new());
                spawn_local(async move {
                    let outcome = ask_question(&backend, &request).await;
                    let _ = state.try_update(|s| s.settle(token, &outcome, now_time_label()));
                });
            }
            Some(Err(AskRejected::Blank)) => {}
            Some(Err(AskRejected::Busy)) => {
                log::debug!("u602: submit ignored, question in flight");
            }
            None => {}
        }
    }

    pub fn clear(&self) {
        self.state.update(|s| s.clear());
    }
}
