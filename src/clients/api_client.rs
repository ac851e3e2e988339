//! Shared request/response pipeline for authenticated Daraja API calls.
//!
//! This module provides the [`ApiClient`] type. It owns the target URL and the
//! bearer access token, builds authenticated requests, executes them, and
//! validates the responses through its [`ErrorHandler`].

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::error_handler::{ConsoleErrorHandler, ErrorHandler};
use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::ResponsePayload;
use crate::config::DarajaConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MIME type of every Daraja request body.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Base client for authenticated calls to a single Daraja endpoint.
///
/// The client handles:
/// - Authenticated POST construction (`Content-Type` and `Authorization: Bearer`)
/// - One exchange per call, with the connection released when the call ends
/// - Status and body validation reported through the [`ErrorHandler`]
///
/// Validation never aborts a call. A payload with a bad status code or no body
/// is still returned, so callers that care must check
/// [`ResponsePayload::is_success`] themselves.
///
/// Calls are async and must be awaited inside a Tokio runtime, which is the
/// runtime `reqwest` drives its connections on.
///
/// # Example
///
/// ```rust,ignore
/// use daraja_api::clients::ApiClient;
/// use serde_json::json;
///
/// let mut client = ApiClient::new("https://sandbox.safaricom.co.ke/mpesa/c2b/v1/simulate");
/// client.set_access_token(oauth_response.access_token.clone());
///
/// let request = client
///     .build_authenticated_post_request()
///     .with_body(json!({"ShortCode": "600000", "Amount": 10}));
///
/// let payload = client.execute_and_validate(request).await?;
/// println!("{}", payload.status_info());
/// ```
pub struct ApiClient {
    url: String,
    access_token: String,
    error_handler: Arc<dyn ErrorHandler>,
    timeout: Option<Duration>,
    user_agent: String,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("url", &self.url)
            .field("access_token", &"*****")
            .field("error_handler", &self.error_handler)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ApiClient {
    /// Creates a client for the given endpoint URL.
    ///
    /// The access token starts empty and the error handler defaults to
    /// [`ConsoleErrorHandler`].
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: String::new(),
            error_handler: Arc::new(ConsoleErrorHandler),
            timeout: None,
            user_agent: build_user_agent(None),
        }
    }

    /// Creates a client that applies the transport settings from `config`.
    #[must_use]
    pub fn with_config(url: impl Into<String>, config: &DarajaConfig) -> Self {
        let mut client = Self::new(url);
        client.timeout = config.timeout();
        client.user_agent = build_user_agent(config.user_agent_prefix());
        client
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the current access token (empty until set).
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Sets the bearer token used by subsequent requests.
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.access_token = access_token.into();
    }

    /// Returns the error handler notifications are routed to.
    #[must_use]
    pub fn error_handler(&self) -> &dyn ErrorHandler {
        self.error_handler.as_ref()
    }

    /// Replaces the error handler for this client only.
    pub fn set_error_handler(&mut self, error_handler: Arc<dyn ErrorHandler>) {
        self.error_handler = error_handler;
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the User-Agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Builds a POST request to this client's URL with authorization baked in.
    ///
    /// The request carries exactly two headers, `Content-Type: application/json`
    /// and `Authorization: Bearer <token>`. The token is not checked; an unset
    /// token produces the value `"Bearer "`. Attach the body with
    /// [`HttpRequest::with_body`] before executing.
    #[must_use]
    pub fn build_authenticated_post_request(&self) -> HttpRequest {
        if self.access_token.is_empty() {
            tracing::warn!(
                "Building an authenticated request to {} without an access token",
                self.url
            );
        }

        HttpRequest::builder(HttpMethod::Post, self.url.clone())
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .build_unchecked()
    }

    /// Sends the request and validates the response.
    ///
    /// The full body is read and decoded as a JSON object, all headers are
    /// copied, and the status code and reason are recorded. Then:
    /// - a status outside `200..300` is reported as an error notification
    /// - an absent or unparseable body is reported as an error notification
    ///
    /// Both checks run independently and neither stops the payload from being
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails validation (`InvalidRequest`)
    /// or the exchange cannot complete (`Network`). No payload is produced and
    /// no notification is sent in that case.
    pub async fn execute_and_validate(
        &self,
        request: HttpRequest,
    ) -> Result<ResponsePayload, HttpError> {
        let payload = send_request(&request, self.timeout, &self.user_agent).await?;
        self.validate_payload(&payload);
        Ok(payload)
    }

    /// Reports a bad status code or a missing body to the error handler.
    pub fn validate_payload(&self, payload: &ResponsePayload) {
        let status_info = payload.status_info();

        if !payload.is_success() {
            self.error_handler.notify_error(&format!(
                "Server returned error response. INFO: {status_info}"
            ));
        }

        if !payload.has_body() {
            self.error_handler
                .notify_error(&format!("There was no response body. INFO: {status_info}"));
        }
    }
}

/// Builds the User-Agent header value.
pub(crate) fn build_user_agent(prefix: Option<&str>) -> String {
    let prefix = prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    format!("{prefix}Daraja API Library v{SDK_VERSION} | Rust {rust_version}")
}

/// Performs one HTTP exchange and collects the response into a payload.
///
/// A fresh transport client with idle pooling disabled is created for the
/// call, so its connection is released as soon as the call returns.
pub(crate) async fn send_request(
    request: &HttpRequest,
    timeout: Option<Duration>,
    user_agent: &str,
) -> Result<ResponsePayload, HttpError> {
    request.verify()?;

    let mut client_builder = reqwest::Client::builder()
        .use_rustls_tls()
        .pool_max_idle_per_host(0)
        .user_agent(user_agent);
    if let Some(timeout) = timeout {
        client_builder = client_builder.timeout(timeout);
    }
    let client = client_builder.build()?;

    let mut req_builder = match request.http_method {
        HttpMethod::Get => client.get(&request.url),
        HttpMethod::Post => client.post(&request.url),
    };
    for (key, value) in &request.headers {
        req_builder = req_builder.header(key, value);
    }
    if let Some(query) = &request.query {
        req_builder = req_builder.query(query);
    }
    if let Some(body) = &request.body {
        req_builder = req_builder.json(body);
    }

    tracing::debug!("Sending {} request to {}", request.http_method, request.url);
    let res = req_builder.send().await?;

    let mut payload = ResponsePayload::new(res.status().as_u16(), reason_phrase(&res));
    for (name, value) in res.headers() {
        payload.headers.insert(
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }

    let body_text = res.text().await?;
    payload.body = ResponsePayload::decode_body(&body_text);

    tracing::debug!("Received {} from {}", payload.status_info(), request.url);

    Ok(payload)
}

/// Returns the reason phrase the server sent.
///
/// hyper only records the phrase when it differs from the canonical one for
/// the status code, so the canonical phrase is the fallback.
fn reason_phrase(res: &reqwest::Response) -> String {
    res.extensions()
        .get::<hyper::ext::ReasonPhrase>()
        .map_or_else(
            || res.status().canonical_reason().unwrap_or_default().to_string(),
            |reason| String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::error_handler::RecordingErrorHandler;
    use crate::config::{ConsumerKey, ConsumerSecret};
    use serde_json::json;

    const URL: &str = "https://sandbox.safaricom.co.ke/mpesa/c2b/v1/simulate";

    fn recording_client() -> (ApiClient, Arc<RecordingErrorHandler>) {
        let recorder = Arc::new(RecordingErrorHandler::new());
        let mut client = ApiClient::new(URL);
        client.set_error_handler(recorder.clone());
        (client, recorder)
    }

    #[test]
    fn test_authenticated_post_has_exactly_two_headers() {
        let mut client = ApiClient::new(URL);
        client.set_access_token("test-token");

        let request = client.build_authenticated_post_request();

        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(request.url, URL);
        assert_eq!(request.headers.len(), 2);
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header("Authorization"), Some("Bearer test-token"));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_authenticated_post_tracks_current_token() {
        let mut client = ApiClient::new(URL);
        client.set_access_token("first");
        client.set_access_token("second");

        let request = client.build_authenticated_post_request();
        assert_eq!(request.header("Authorization"), Some("Bearer second"));
    }

    #[test]
    fn test_authenticated_post_without_token_is_not_rejected() {
        let client = ApiClient::new(URL);
        let request = client.build_authenticated_post_request();
        assert_eq!(request.header("Authorization"), Some("Bearer "));
    }

    #[test]
    fn test_validate_successful_payload_is_silent() {
        let (client, recorder) = recording_client();
        let payload = ResponsePayload::new(200, "OK").with_body(json!({"ok": true}));

        client.validate_payload(&payload);

        assert!(recorder.is_empty());
    }

    #[test]
    fn test_validate_bad_status_reports_once() {
        let (client, recorder) = recording_client();
        let payload = ResponsePayload::new(400, "Bad Request").with_body(json!({"errorCode": "x"}));

        client.validate_payload(&payload);

        let errors = recorder.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("400 - Bad Request"));
        assert!(errors[0].starts_with("Server returned error response."));
    }

    #[test]
    fn test_validate_missing_body_reports_once_regardless_of_status() {
        let (client, recorder) = recording_client();

        client.validate_payload(&ResponsePayload::new(200, "OK"));

        let errors = recorder.errors();
        assert_eq!(errors, vec!["There was no response body. INFO: 200 - OK"]);
    }

    #[test]
    fn test_validate_bad_status_and_missing_body_both_fire() {
        let (client, recorder) = recording_client();

        client.validate_payload(&ResponsePayload::new(500, "Internal Server Error"));

        let errors = recorder.errors();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("500 - Internal Server Error"));
        assert!(errors[1].starts_with("There was no response body."));
        assert!(recorder.exceptions().is_empty());
    }

    #[test]
    fn test_error_handler_is_instance_scoped() {
        let (client, recorder) = recording_client();
        let (_other, other_recorder) = recording_client();

        client.validate_payload(&ResponsePayload::new(404, "Not Found"));

        assert_eq!(recorder.errors().len(), 2);
        assert!(other_recorder.is_empty());
    }

    #[test]
    fn test_with_config_applies_transport_settings() {
        let config = DarajaConfig::builder()
            .consumer_key(ConsumerKey::new("key").unwrap())
            .consumer_secret(ConsumerSecret::new("secret").unwrap())
            .timeout(Duration::from_secs(5))
            .user_agent_prefix("MyShop/2.0")
            .build()
            .unwrap();

        let client = ApiClient::with_config(URL, &config);

        assert_eq!(client.timeout(), Some(Duration::from_secs(5)));
        assert!(client.user_agent().starts_with("MyShop/2.0 | "));
        assert!(client.user_agent().contains("Daraja API Library v"));
    }

    #[test]
    fn test_debug_masks_access_token() {
        let mut client = ApiClient::new(URL);
        client.set_access_token("very-secret-token");

        let debug = format!("{client:?}");
        assert!(debug.contains("ApiClient"));
        assert!(!debug.contains("very-secret-token"));
    }

    #[test]
    fn test_user_agent_without_prefix() {
        let user_agent = build_user_agent(None);
        assert!(user_agent.starts_with("Daraja API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[tokio::test]
    async fn test_execute_rejects_post_without_body_before_sending() {
        let (mut client, recorder) = recording_client();
        client.set_access_token("token");

        let request = client.build_authenticated_post_request();
        let result = client.execute_and_validate(request).await;

        assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
        assert!(recorder.is_empty());
    }
}
