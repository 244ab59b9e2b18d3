//! API utilities for frontend-backend communication
//!
//! Provides helper functions for resolving the backend base URL and building
//! endpoint URLs from it.

/// Port the RAG backend binds to when deployed next to the UI
pub const DEFAULT_BACKEND_PORT: u16 = 8000;

/// Get the base URL derived from the current window location
///
/// Keeps the page's protocol and hostname and swaps the port for the
/// backend's one.
///
/// # Returns
/// - Base URL like "http://localhost:8000"
/// - Empty string if window is not available
pub fn location_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_BACKEND_PORT)
}

/// Normalize a configured base URL (surrounding whitespace and trailing slashes)
pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

/// Build a full API URL from a base and a path
///
/// # Example
/// ```rust
/// use rag_chat_frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("http://host:8000/", "/query"), "http://host:8000/query");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        normalize_base(base),
        path.trim_start_matches('/')
    )
}
