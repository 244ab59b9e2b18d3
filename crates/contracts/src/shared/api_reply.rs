use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Тело ответа бэкенда при ошибке (`{"error": "..."}`, поле необязательно)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
        }
    }

    /// Server-provided message; an empty string counts as absent.
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// Raw classification of an HTTP reply before it is mapped to an endpoint outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply<T> {
    /// 2xx with a body matching `T`
    Success(T),
    /// non-2xx with a JSON body
    Rejected(ApiErrorBody),
    /// body is not JSON, or a 2xx body does not match `T`
    Broken(String),
}

/// Classify a reply the way the browser client reads it: the body is parsed as
/// JSON first, and only then is the status consulted.
pub fn classify_reply<T: DeserializeOwned>(ok: bool, body: &str) -> ApiReply<T> {
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => return ApiReply::Broken(e.to_string()),
    };

    if ok {
        match serde_json::from_value::<T>(value) {
            Ok(data) => ApiReply::Success(data),
            Err(e) => ApiReply::Broken(e.to_string()),
        }
    } else {
        // Поле error может отсутствовать или быть не строкой
        let body = serde_json::from_value::<ApiErrorBody>(value).unwrap_or_default();
        ApiReply::Rejected(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: i32,
    }

    #[test]
    fn test_success_body() {
        let reply = classify_reply::<Payload>(true, r#"{"value": 7}"#);
        assert_eq!(reply, ApiReply::Success(Payload { value: 7 }));
    }

    #[test]
    fn test_rejected_with_and_without_error() {
        let reply = classify_reply::<Payload>(false, r#"{"error": "boom"}"#);
        assert_eq!(reply, ApiReply::Rejected(ApiErrorBody::new("boom")));

        let reply = classify_reply::<Payload>(false, r#"{"detail": "x"}"#);
        assert_eq!(reply, ApiReply::Rejected(ApiErrorBody::default()));

        let reply = classify_reply::<Payload>(false, r#"{"error": 42}"#);
        assert_eq!(reply, ApiReply::Rejected(ApiErrorBody::default()));
    }

    #[test]
    fn test_empty_error_is_absent() {
        assert_eq!(ApiErrorBody::new("").message(), None);
        assert_eq!(ApiErrorBody::new("bad").message(), Some("bad"));
    }

    #[test]
    fn test_non_json_is_broken_regardless_of_status() {
        assert!(matches!(
            classify_reply::<Payload>(true, "<html>"),
            ApiReply::Broken(_)
        ));
        assert!(matches!(
            classify_reply::<Payload>(false, "Internal Server Error"),
            ApiReply::Broken(_)
        ));
    }

    #[test]
    fn test_success_with_wrong_shape_is_broken() {
        assert!(matches!(
            classify_reply::<Payload>(true, r#"{"other": 1}"#),
            ApiReply::Broken(_)
        ));
    }
}
