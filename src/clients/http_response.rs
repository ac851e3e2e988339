//! Response payload for a single Daraja API exchange.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// The status, headers, and decoded JSON body of one HTTP response.
///
/// A payload is built fresh for each exchange. Its `body` is `None` when the
/// response had no body or the body was not a JSON object.
///
/// # Example
///
/// ```rust
/// use daraja_api::ResponsePayload;
/// use serde_json::json;
///
/// let payload = ResponsePayload::new(201, "Created")
///     .with_body(json!({"ConversationID": "c1"}));
///
/// assert!(payload.is_success());
/// assert_eq!(payload.status_info(), "201 - Created");
/// assert_eq!(payload.get_str("ConversationID"), Some("c1"));
/// assert_eq!(payload.get_str("ResponseDescription"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponsePayload {
    /// The HTTP status code.
    pub status_code: u16,
    /// The reason phrase for the status code.
    pub status_message: String,
    /// Response headers. Repeated headers keep their last value.
    pub headers: HashMap<String, String>,
    /// The decoded JSON object body, if one was present.
    pub body: Option<Map<String, Value>>,
}

impl ResponsePayload {
    /// Creates a payload with the given status and no headers or body.
    #[must_use]
    pub fn new(status_code: u16, status_message: impl Into<String>) -> Self {
        Self {
            status_code,
            status_message: status_message.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Returns this payload with `body` set from a JSON value.
    ///
    /// Values other than JSON objects leave the body absent.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = match body {
            Value::Object(map) => Some(map),
            _ => None,
        };
        self
    }

    /// Decodes raw response text into a body mapping.
    ///
    /// Empty, malformed, or non-object JSON yields `None`.
    #[must_use]
    pub fn decode_body(text: &str) -> Option<Map<String, Value>> {
        if text.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!("Response body is not valid JSON: {}", err);
                None
            }
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code >= 200 && self.status_code < 300
    }

    /// Returns `true` if a JSON object body was decoded.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Formats the status as `"<code> - <reason>"`.
    #[must_use]
    pub fn status_info(&self) -> String {
        format!("{} - {}", self.status_code, self.status_message)
    }

    /// Returns a body field, if the body and key are present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.as_ref().and_then(|body| body.get(key))
    }

    /// Returns a string body field.
    ///
    /// Missing keys and non-string values yield `None`.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Looks up a header by name, ignoring ASCII case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_success_covers_2xx_only() {
        for code in 200..300 {
            assert!(ResponsePayload::new(code, "").is_success(), "code {code}");
        }
        assert!(!ResponsePayload::new(199, "").is_success());
        assert!(!ResponsePayload::new(300, "Multiple Choices").is_success());
        assert!(!ResponsePayload::new(404, "Not Found").is_success());
        assert!(!ResponsePayload::new(500, "Internal Server Error").is_success());
    }

    #[test]
    fn test_status_info_format() {
        let payload = ResponsePayload::new(500, "Internal Server Error");
        assert_eq!(payload.status_info(), "500 - Internal Server Error");
    }

    #[test]
    fn test_decode_body_accepts_objects_only() {
        assert!(ResponsePayload::decode_body(r#"{"a":"b"}"#).is_some());
        assert!(ResponsePayload::decode_body("").is_none());
        assert!(ResponsePayload::decode_body("   ").is_none());
        assert!(ResponsePayload::decode_body("<html>oops</html>").is_none());
        assert!(ResponsePayload::decode_body("[1,2,3]").is_none());
        assert!(ResponsePayload::decode_body("\"text\"").is_none());
    }

    #[test]
    fn test_get_str_tolerates_missing_and_mismatched() {
        let payload = ResponsePayload::new(200, "OK").with_body(json!({
            "ConversationID": "c1",
            "Amount": 100,
            "Nested": {"k": "v"}
        }));

        assert_eq!(payload.get_str("ConversationID"), Some("c1"));
        assert_eq!(payload.get_str("Amount"), None);
        assert_eq!(payload.get_str("Nested"), None);
        assert_eq!(payload.get_str("Missing"), None);
        assert_eq!(payload.get("Amount"), Some(&json!(100)));
    }

    #[test]
    fn test_lookups_on_absent_body() {
        let payload = ResponsePayload::new(500, "Internal Server Error");
        assert!(!payload.has_body());
        assert!(payload.get("ConversationID").is_none());
        assert!(payload.get_str("ConversationID").is_none());
    }

    #[test]
    fn test_with_body_ignores_non_objects() {
        let payload = ResponsePayload::new(200, "OK").with_body(json!(["not", "a", "map"]));
        assert!(!payload.has_body());
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let mut payload = ResponsePayload::new(200, "OK");
        payload
            .headers
            .insert("content-type".to_string(), "application/json".to_string());

        assert_eq!(payload.header("Content-Type"), Some("application/json"));
        assert!(payload.header("x-request-id").is_none());
    }
}
