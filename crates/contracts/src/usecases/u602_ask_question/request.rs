use serde::{Deserialize, Serialize};

/// Passages requested per question unless the user changes it
pub const DEFAULT_TOP_K: u32 = 5;

/// Модель генерации. В UI не настраивается.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Тело запроса `POST /query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    pub top_k: u32,
    pub model: String,
}

impl QueryRequest {
    pub fn new(question: impl Into<String>, top_k: u32) -> Self {
        Self {
            question: question.into(),
            top_k,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}
