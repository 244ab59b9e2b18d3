use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Описание документа, как его возвращает бэкенд
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadedRecord {
    #[serde(default)]
    pub doc_id: Option<String>,
    /// Set for documents that came from a file part
    #[serde(default)]
    pub filename: Option<String>,
    /// Set for documents that came from a raw text field
    #[serde(default)]
    pub source: Option<String>,
}

/// Элемент массива `uploaded`.
///
/// Only the array length matters to the client, so any element shape is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UploadedDocument {
    Record(UploadedRecord),
    Other(Value),
}

impl UploadedDocument {
    pub fn record(&self) -> Option<&UploadedRecord> {
        match self {
            UploadedDocument::Record(record) => Some(record),
            UploadedDocument::Other(_) => None,
        }
    }

    pub fn filename(&self) -> Option<&str> {
        self.record().and_then(|r| r.filename.as_deref())
    }

    pub fn source(&self) -> Option<&str> {
        self.record().and_then(|r| r.source.as_deref())
    }
}

/// Успешный ответ `POST /upload`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub uploaded: Vec<UploadedDocument>,
    /// Documents held by the backend after this upload, not just this batch
    pub total_docs: u64,
}
