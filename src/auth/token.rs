//! Access token returned by the Daraja OAuth endpoint.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::clients::ApiClient;

/// Token response from `GET /oauth/v1/generate`.
///
/// Daraja sends `expires_in` as a string of seconds (`"3599"`); numeric
/// values are accepted too. The SDK does not track expiry, so callers decide
/// when to authenticate again.
///
/// # Example
///
/// ```rust
/// use daraja_api::auth::OAuthResponse;
///
/// let response: OAuthResponse = serde_json::from_str(
///     r#"{"access_token":"abc123","expires_in":"3599"}"#,
/// ).unwrap();
///
/// assert_eq!(response.access_token, "abc123");
/// assert_eq!(response.expires_in_seconds(), Some(3599));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthResponse {
    /// The bearer token for subsequent API calls.
    pub access_token: String,

    /// Token lifetime in seconds, as sent by the server.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub expires_in: Option<String>,
}

impl OAuthResponse {
    /// Returns the token lifetime in seconds, if it parses as an integer.
    #[must_use]
    pub fn expires_in_seconds(&self) -> Option<u64> {
        self.expires_in.as_deref()?.trim().parse().ok()
    }

    /// Installs this token on `client` for its subsequent requests.
    pub fn apply_to(&self, client: &mut ApiClient) {
        client.set_access_token(self.access_token.clone());
    }
}

impl fmt::Debug for OAuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthResponse")
            .field("access_token", &"*****")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_string_expiry() {
        let response: OAuthResponse =
            serde_json::from_str(r#"{"access_token":"t","expires_in":"3599"}"#).unwrap();
        assert_eq!(response.expires_in.as_deref(), Some("3599"));
        assert_eq!(response.expires_in_seconds(), Some(3599));
    }

    #[test]
    fn test_deserializes_numeric_expiry() {
        let response: OAuthResponse =
            serde_json::from_str(r#"{"access_token":"t","expires_in":3600}"#).unwrap();
        assert_eq!(response.expires_in_seconds(), Some(3600));
    }

    #[test]
    fn test_missing_expiry_is_none() {
        let response: OAuthResponse = serde_json::from_str(r#"{"access_token":"t"}"#).unwrap();
        assert!(response.expires_in.is_none());
        assert!(response.expires_in_seconds().is_none());
    }

    #[test]
    fn test_missing_access_token_is_rejected() {
        let result: Result<OAuthResponse, _> = serde_json::from_str(r#"{"expires_in":"3599"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_masks_access_token() {
        let response = OAuthResponse {
            access_token: "secret-token".to_string(),
            expires_in: None,
        };
        assert!(!format!("{response:?}").contains("secret-token"));
    }

    #[test]
    fn test_apply_to_sets_client_token() {
        let response = OAuthResponse {
            access_token: "fresh-token".to_string(),
            expires_in: Some("3599".to_string()),
        };
        let mut client = ApiClient::new("https://sandbox.safaricom.co.ke/mpesa/c2b/v1/simulate");

        response.apply_to(&mut client);

        assert_eq!(client.access_token(), "fresh-token");
        let request = client.build_authenticated_post_request();
        assert_eq!(request.header("Authorization"), Some("Bearer fresh-token"));
    }
}
