use serde::{Deserialize, Serialize};

/// Фрагмент документа, использованный при ответе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedSource {
    pub doc_id: String,
    pub chunk_id: u64,
    pub score: f64,
}

/// Успешный ответ `POST /query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<RetrievedSource>,
    #[serde(default)]
    pub retrieved_count: Option<usize>,
}

impl QueryResponse {
    /// Number of passages behind the answer, if the backend reported any
    pub fn source_count(&self) -> Option<usize> {
        self.retrieved_count.or_else(|| {
            if self.sources.is_empty() {
                None
            } else {
                Some(self.sources.len())
            }
        })
    }
}
