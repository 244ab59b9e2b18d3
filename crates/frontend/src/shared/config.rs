//! Runtime configuration of the UI
//!
//! The backend base URL is baked in at build time from `RAG_API_BASE_URL`
//! (for example `RAG_API_BASE_URL=https://rag.example.com trunk build`).
//! Without it the UI talks to the backend port on the page's own host.

use super::api_utils::{join_url, location_base, normalize_base};
use contracts::usecases::u602_ask_question::{DEFAULT_MODEL, DEFAULT_TOP_K};

/// Build-time override of the backend base URL
pub const API_BASE_URL_ENV: Option<&str> = option_env!("RAG_API_BASE_URL");

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL shared by both panels, without a trailing slash
    pub api_base_url: String,
    /// Initial retrieval depth for new questions
    pub default_top_k: u32,
    /// Generation model sent with every question
    pub model: String,
}

impl AppConfig {
    /// Configuration for the running page
    pub fn from_build_env() -> Self {
        let base = API_BASE_URL_ENV
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(location_base);
        Self::with_base_url(&base)
    }

    pub fn with_base_url(base: &str) -> Self {
        Self {
            api_base_url: normalize_base(base),
            default_top_k: DEFAULT_TOP_K,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.api_base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::with_base_url("http://localhost:8000/");
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.default_top_k, 5);
        assert_eq!(config.model, "gemini-2.0-flash-exp");
    }

    #[test]
    fn test_endpoint() {
        let config = AppConfig::with_base_url("http://localhost:8000");
        assert_eq!(config.endpoint("/upload"), "http://localhost:8000/upload");
        assert_eq!(config.endpoint("/query"), "http://localhost:8000/query");
    }
}
