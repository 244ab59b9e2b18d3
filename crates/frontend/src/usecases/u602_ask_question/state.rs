//! Chat transcript state machine, independent of the DOM.
//!
//! The transcript only grows, except for [`ChatState::clear`]. A question is
//! appended when it is submitted, its answer or error when the reply settles.

use crate::shared::submit_gate::{InFlight, Settlement, SubmitGate, SubmitPhase};
use contracts::usecases::u602_ask_question::{QueryOutcome, QueryRequest};
use uuid::Uuid;

pub const FALLBACK_ANSWER_ERROR: &str = "Failed to get answer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatEntryKind {
    Question,
    Answer,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    /// Render key only
    pub id: Uuid,
    pub kind: ChatEntryKind,
    pub content: String,
    /// Local wall-clock time the entry was created
    pub timestamp: String,
    /// Passages behind an answer, when the backend reports them
    pub retrieved_count: Option<usize>,
}

impl ChatEntry {
    fn new(kind: ChatEntryKind, content: String, timestamp: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            content,
            timestamp,
            retrieved_count: None,
        }
    }

    pub fn question(content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self::new(ChatEntryKind::Question, content.into(), timestamp.into())
    }

    pub fn answer(content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self::new(ChatEntryKind::Answer, content.into(), timestamp.into())
    }

    pub fn error(content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self::new(ChatEntryKind::Error, content.into(), timestamp.into())
    }

    /// Entry for a settled reply
    pub fn from_outcome(outcome: &QueryOutcome, timestamp: impl Into<String>) -> Self {
        match outcome {
            QueryOutcome::Answered(data) => {
                let mut entry = Self::answer(data.answer.clone(), timestamp);
                entry.retrieved_count = data.source_count();
                entry
            }
            QueryOutcome::Rejected { error } => Self::error(
                error.as_deref().unwrap_or(FALLBACK_ANSWER_ERROR),
                timestamp,
            ),
            QueryOutcome::Failed { message } => {
                Self::error(format!("Error: {}", message), timestamp)
            }
        }
    }
}

/// Почему вопрос не отправлен
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskRejected {
    Blank,
    Busy,
}

#[derive(Debug, Clone)]
pub struct ChatState {
    transcript: Vec<ChatEntry>,
    top_k: u32,
    model: String,
    gate: SubmitGate,
}

impl ChatState {
    pub fn new(top_k: u32, model: impl Into<String>) -> Self {
        Self {
            transcript: Vec::new(),
            top_k,
            model: model.into(),
            gate: SubmitGate::new(),
        }
    }

    pub fn transcript(&self) -> &[ChatEntry] {
        &self.transcript
    }

    pub fn top_k(&self) -> u32 {
        self.top_k
    }

    pub fn phase(&self) -> SubmitPhase {
        self.gate.phase()
    }

    pub fn is_asking(&self) -> bool {
        self.gate.is_submitting()
    }

    /// Applies the Top K field. Any number is taken as is; text that is not a
    /// number keeps the old value.
    pub fn set_top_k_from_input(&mut self, raw: &str) -> bool {
        match raw.trim().parse::<u32>() {
            Ok(value) => {
                self.top_k = value;
                true
            }
            Err(_) => false,
        }
    }

    /// Starts a question.
    ///
    /// The question entry is appended right away and the request to send is
    /// returned with the in-flight token. The question is sent as typed; only
    /// the blank check trims it.
    pub fn begin_question(
        &mut self,
        text: &str,
        timestamp: impl Into<String>,
    ) -> Result<(InFlight, QueryRequest), AskRejected> {
        if text.trim().is_empty() {
            return Err(AskRejected::Blank);
        }
        let token = self.gate.try_begin().ok_or(AskRejected::Busy)?;

        self.transcript.push(ChatEntry::question(text, timestamp));
        let request = QueryRequest::new(text, self.top_k).with_model(self.model.clone());
        Ok((token, request))
    }

    pub fn settle(&mut self, token: InFlight, outcome: &QueryOutcome, timestamp: impl Into<String>) {
        let entry = ChatEntry::from_outcome(outcome, timestamp);
        let settlement = match entry.kind {
            ChatEntryKind::Answer => Settlement::Success,
            _ => Settlement::Failure,
        };
        self.transcript.push(entry);
        self.gate.settle(token, settlement);
    }

    pub fn clear(&mut self) {
        self.transcript.clear();
    }
}
