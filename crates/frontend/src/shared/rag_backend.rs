//! Transport seam between the panels and the RAG backend.
//!
//! Panels only see [`RagBackend`]; the browser build plugs in
//! [`FetchRagBackend`], tests plug in an in-memory double.

use super::config::AppConfig;
use async_trait::async_trait;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_upload_documents::{UploadDocuments, FILES_FIELD};
use contracts::usecases::u602_ask_question::{AskQuestion, QueryRequest};
use gloo_net::http::Request;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Status and raw body of a finished HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub ok: bool,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            ok: (200..300).contains(&status),
            body: body.into(),
        }
    }
}

/// Ошибки транспорта. Текст выводится пользователю как есть.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("{0}")]
    Request(String),

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Body(String),
}

#[async_trait(?Send)]
pub trait RagBackend {
    /// Handle of a user-picked file, passed to the transport unmodified
    type File: Clone + 'static;

    /// `POST {base}/upload`, one `files` part per handle
    async fn upload(&self, files: Vec<Self::File>) -> Result<HttpReply, TransportError>;

    /// `POST {base}/query` with a JSON body
    async fn query(&self, request: &QueryRequest) -> Result<HttpReply, TransportError>;
}

/// Browser `fetch` implementation
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRagBackend {
    upload_url: String,
    query_url: String,
}

impl FetchRagBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            upload_url: config.endpoint(UploadDocuments::endpoint()),
            query_url: config.endpoint(AskQuestion::endpoint()),
        }
    }
}

/// Message of a thrown JS value (`error.message` for `Error` objects)
fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Message of a gloo-net failure; JS exceptions give `error.message`, not `Name: message`
fn gloo_message(err: &gloo_net::Error) -> String {
    match err {
        gloo_net::Error::JsError(js) => js.message.clone(),
        other => other.to_string(),
    }
}

async fn read_reply(request: Request) -> Result<HttpReply, TransportError> {
    let response = request
        .send()
        .await
        .map_err(|e| TransportError::Network(gloo_message(&e)))?;
    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Body(gloo_message(&e)))?;
    Ok(HttpReply { status, ok, body })
}

#[async_trait(?Send)]
impl RagBackend for FetchRagBackend {
    type File = web_sys::File;

    async fn upload(&self, files: Vec<web_sys::File>) -> Result<HttpReply, TransportError> {
        let form_data =
            web_sys::FormData::new().map_err(|e| TransportError::Request(js_message(&e)))?;
        for file in &files {
            form_data
                .append_with_blob_and_filename(FILES_FIELD, file, &file.name())
                .map_err(|e| TransportError::Request(js_message(&e)))?;
        }

        // Content-Type с boundary выставит сам браузер
        let request = Request::post(&self.upload_url)
            .body(form_data)
            .map_err(|e| TransportError::Request(gloo_message(&e)))?;
        read_reply(request).await
    }

    async fn query(&self, request: &QueryRequest) -> Result<HttpReply, TransportError> {
        let request = Request::post(&self.query_url)
            .json(request)
            .map_err(|e| TransportError::Request(gloo_message(&e)))?;
        read_reply(request).await
    }
}
