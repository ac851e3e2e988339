//! Customer-to-Business endpoint client.
//!
//! This module provides the [`C2bClient`] type, which layers C2B request
//! bodies and response mapping over the shared [`ApiClient`] pipeline.

use std::sync::Arc;

use crate::c2b::types::{RegisterUrlRequest, SimulateRequest, StandardResponse};
use crate::clients::{ApiClient, ErrorHandler, HttpRequest};
use crate::config::DarajaConfig;

/// Path of the C2B URL registration endpoint.
pub const C2B_REGISTER_URL_PATH: &str = "/mpesa/c2b/v1/registerurl";

/// Path of the C2B transaction simulation endpoint.
pub const C2B_SIMULATE_PATH: &str = "/mpesa/c2b/v1/simulate";

/// Message sent with exception notifications from this client.
pub const C2B_EXCEPTION_MESSAGE: &str = "Error executing C2B Request";

/// Client for one C2B endpoint.
///
/// Calls never fail outright. A failed exchange is forwarded to the error
/// handler's exception notification and yields `None`; a response without a
/// body also yields `None`. Any other response, including one with a bad
/// status code, is mapped into a [`StandardResponse`].
///
/// # Example
///
/// ```rust,ignore
/// use daraja_api::c2b::{C2bClient, CommandId, SimulateRequest};
///
/// let mut client = C2bClient::simulate_client(&config);
/// client.set_access_token(token.access_token.clone());
///
/// let response = client
///     .simulate(&SimulateRequest {
///         short_code: "600000".to_string(),
///         command_id: CommandId::CustomerPayBillOnline,
///         amount: 10,
///         msisdn: "254708374149".to_string(),
///         bill_ref_number: Some("invoice-42".to_string()),
///     })
///     .await;
///
/// if let Some(response) = response {
///     println!("{:?}", response.conversation_id());
/// }
/// ```
#[derive(Debug)]
pub struct C2bClient {
    base: ApiClient,
}

// Verify C2bClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<C2bClient>();
};

impl C2bClient {
    /// Creates a client for the given endpoint URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            base: ApiClient::new(url),
        }
    }

    /// Creates a client for the given endpoint URL with settings from `config`.
    #[must_use]
    pub fn with_config(url: impl Into<String>, config: &DarajaConfig) -> Self {
        Self {
            base: ApiClient::with_config(url, config),
        }
    }

    /// Creates a client for the URL registration endpoint of the configured environment.
    #[must_use]
    pub fn register_url_client(config: &DarajaConfig) -> Self {
        Self::with_config(config.base_url().join(C2B_REGISTER_URL_PATH), config)
    }

    /// Creates a client for the simulation endpoint of the configured environment.
    #[must_use]
    pub fn simulate_client(config: &DarajaConfig) -> Self {
        Self::with_config(config.base_url().join(C2B_SIMULATE_PATH), config)
    }

    /// Returns the underlying API client.
    #[must_use]
    pub const fn base(&self) -> &ApiClient {
        &self.base
    }

    /// Returns the underlying API client mutably.
    pub fn base_mut(&mut self) -> &mut ApiClient {
        &mut self.base
    }

    /// Sets the bearer token used by subsequent requests.
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.base.set_access_token(access_token);
    }

    /// Replaces the error handler for this client only.
    pub fn set_error_handler(&mut self, error_handler: Arc<dyn ErrorHandler>) {
        self.base.set_error_handler(error_handler);
    }

    /// Executes a C2B request and maps the response.
    ///
    /// Returns `None` if the exchange failed (after notifying the error
    /// handler) or the response had no body.
    pub async fn execute(&self, request: HttpRequest) -> Option<StandardResponse> {
        match self.base.execute_and_validate(request).await {
            Ok(payload) if payload.has_body() => Some(StandardResponse::from_payload(&payload)),
            Ok(_) => None,
            Err(e) => {
                self.base
                    .error_handler()
                    .notify_exception(C2B_EXCEPTION_MESSAGE, &e);
                None
            }
        }
    }

    /// Registers the confirmation and validation URLs for a shortcode.
    ///
    /// The client must point at the registration endpoint.
    pub async fn register_url(&self, request: &RegisterUrlRequest) -> Option<StandardResponse> {
        self.send_body(request).await
    }

    /// Simulates a customer payment (sandbox only).
    ///
    /// The client must point at the simulation endpoint.
    pub async fn simulate(&self, request: &SimulateRequest) -> Option<StandardResponse> {
        self.send_body(request).await
    }

    async fn send_body<T: serde::Serialize + Sync>(&self, body: &T) -> Option<StandardResponse> {
        let body = match serde_json::to_value(body) {
            Ok(body) => body,
            Err(e) => {
                self.base
                    .error_handler()
                    .notify_exception(C2B_EXCEPTION_MESSAGE, &e);
                return None;
            }
        };

        let request = self.base.build_authenticated_post_request().with_body(body);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::c2b::types::CommandId;
    use crate::clients::RecordingErrorHandler;
    use crate::config::{ConsumerKey, ConsumerSecret, Environment};

    fn config() -> DarajaConfig {
        DarajaConfig::builder()
            .consumer_key(ConsumerKey::new("key").unwrap())
            .consumer_secret(ConsumerSecret::new("secret").unwrap())
            .environment(Environment::Production)
            .build()
            .unwrap()
    }

    #[test]
    fn test_endpoint_constructors_use_environment() {
        let config = config();

        assert_eq!(
            C2bClient::register_url_client(&config).base().url(),
            "https://api.safaricom.co.ke/mpesa/c2b/v1/registerurl"
        );
        assert_eq!(
            C2bClient::simulate_client(&config).base().url(),
            "https://api.safaricom.co.ke/mpesa/c2b/v1/simulate"
        );
    }

    #[test]
    fn test_delegating_setters() {
        let mut client = C2bClient::new("https://example.test/c2b");
        client.set_access_token("token-1");
        assert_eq!(client.base().access_token(), "token-1");

        client.base_mut().set_access_token("token-2");
        assert_eq!(client.base().access_token(), "token-2");
    }

    #[test]
    fn test_transport_failure_notifies_once_and_returns_none() {
        let recorder = Arc::new(RecordingErrorHandler::new());
        // Nothing listens on port 1.
        let mut client = C2bClient::new("http://127.0.0.1:1/mpesa/c2b/v1/simulate");
        client.set_access_token("token");
        client.set_error_handler(recorder.clone());

        let request = SimulateRequest {
            short_code: "600000".to_string(),
            command_id: CommandId::CustomerPayBillOnline,
            amount: 1,
            msisdn: "254708374149".to_string(),
            bill_ref_number: Some("ref".to_string()),
        };

        let response = tokio_test::block_on(client.simulate(&request));

        assert!(response.is_none());
        assert!(recorder.errors().is_empty());
        let exceptions = recorder.exceptions();
        assert_eq!(exceptions.len(), 1);
        assert_eq!(exceptions[0].message, C2B_EXCEPTION_MESSAGE);
    }

    #[tokio::test]
    async fn test_post_without_body_is_reported_as_exception() {
        let recorder = Arc::new(RecordingErrorHandler::new());
        let mut client = C2bClient::new("https://example.test/c2b");
        client.set_error_handler(recorder.clone());

        let request = client.base().build_authenticated_post_request();
        let response = client.execute(request).await;

        assert!(response.is_none());
        assert_eq!(recorder.exceptions().len(), 1);
        assert!(recorder.exceptions()[0]
            .cause
            .contains("without specifying data"));
    }
}
