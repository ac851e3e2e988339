//! OAuth 2.0 client credentials grant against the Daraja token endpoint.
//!
//! Daraja issues access tokens from `GET /oauth/v1/generate` with
//! `grant_type=client_credentials`, authenticated by HTTP Basic credentials
//! built from the app's consumer key and secret.
//!
//! # Example
//!
//! ```rust,ignore
//! use daraja_api::{DarajaConfig, ConsumerKey, ConsumerSecret};
//! use daraja_api::auth::oauth::OAuthClient;
//! use daraja_api::c2b::C2bClient;
//!
//! let config = DarajaConfig::builder()
//!     .consumer_key(ConsumerKey::new("your-key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("your-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let token = OAuthClient::new(&config).authenticate().await?;
//!
//! let mut c2b = C2bClient::simulate_client(&config);
//! token.apply_to(c2b.base_mut());
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::auth::oauth::OAuthError;
use crate::auth::OAuthResponse;
use crate::clients::{build_user_agent, send_request, HttpError, HttpMethod, HttpRequest};
use crate::config::{ConsumerKey, ConsumerSecret, DarajaConfig};

/// Path of the Daraja token endpoint.
pub const OAUTH_TOKEN_PATH: &str = "/oauth/v1/generate";

/// Grant type for client credentials.
const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Obtains access tokens using the app's consumer credentials.
#[derive(Clone, Debug)]
pub struct OAuthClient {
    token_url: String,
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    timeout: Option<std::time::Duration>,
    user_agent: String,
}

// Verify OAuthClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthClient>();
};

impl OAuthClient {
    /// Creates a client for the token endpoint of the configured environment.
    #[must_use]
    pub fn new(config: &DarajaConfig) -> Self {
        Self {
            token_url: config.base_url().join(OAUTH_TOKEN_PATH),
            consumer_key: config.consumer_key().clone(),
            consumer_secret: config.consumer_secret().clone(),
            timeout: config.timeout(),
            user_agent: build_user_agent(config.user_agent_prefix()),
        }
    }

    /// Returns the token endpoint URL.
    #[must_use]
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Returns the `Authorization` header value, `Basic base64(key:secret)`.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        let credentials = format!(
            "{}:{}",
            self.consumer_key.as_ref(),
            self.consumer_secret.as_ref()
        );
        format!("Basic {}", STANDARD.encode(credentials))
    }

    /// Builds the token request descriptor.
    #[must_use]
    pub fn build_token_request(&self) -> HttpRequest {
        HttpRequest::builder(HttpMethod::Get, self.token_url.clone())
            .header("Authorization", self.authorization_header())
            .query_param("grant_type", CLIENT_CREDENTIALS_GRANT_TYPE)
            .build_unchecked()
    }

    /// Requests a new access token.
    ///
    /// # Errors
    ///
    /// - [`OAuthError::AuthenticationFailed`] with status 0 if the exchange
    ///   could not complete
    /// - [`OAuthError::AuthenticationFailed`] with the response status if
    ///   Daraja rejects the credentials or returns an unreadable token
    /// - [`OAuthError::HttpError`] if the request fails validation
    pub async fn authenticate(&self) -> Result<OAuthResponse, OAuthError> {
        let request = self.build_token_request();

        let payload = match send_request(&request, self.timeout, &self.user_agent).await {
            Ok(payload) => payload,
            Err(HttpError::Network(e)) => {
                return Err(OAuthError::AuthenticationFailed {
                    status: 0,
                    message: format!("Network error: {e}"),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let status = payload.status_code;

        if !payload.is_success() {
            let message = payload
                .get_str("errorMessage")
                .map_or_else(|| payload.status_info(), String::from);
            return Err(OAuthError::AuthenticationFailed { status, message });
        }

        let body = payload
            .body
            .ok_or_else(|| OAuthError::AuthenticationFailed {
                status,
                message: "Failed to parse token response: empty body".to_string(),
            })?;

        let token: OAuthResponse = serde_json::from_value(serde_json::Value::Object(body))
            .map_err(|e| OAuthError::AuthenticationFailed {
                status,
                message: format!("Failed to parse token response: {e}"),
            })?;

        tracing::debug!(
            "Obtained Daraja access token (expires in {:?}s)",
            token.expires_in_seconds()
        );

        Ok(token)
    }
}
