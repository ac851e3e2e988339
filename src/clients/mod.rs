//! HTTP client types for Daraja API communication.
//!
//! This module provides the shared request/response pipeline every Daraja
//! endpoint client is built on.
//!
//! # Overview
//!
//! - [`ApiClient`]: Owns the endpoint URL and bearer token; builds, executes, and validates requests
//! - [`HttpRequest`]: A request descriptor to be sent to the API
//! - [`ResponsePayload`]: Status, headers, and decoded JSON body of one response
//! - [`ErrorHandler`]: Pluggable sink for error and exception notifications
//! - [`HttpError`]: Failures that prevent a payload from being produced
//!
//! # Failure Reporting
//!
//! Only a failed exchange is returned as an `Err`. Unsuccessful status codes
//! and missing bodies are advisory: they are sent to the client's
//! [`ErrorHandler`] and the payload is returned regardless.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use daraja_api::clients::{ApiClient, RecordingErrorHandler};
//!
//! let recorder = Arc::new(RecordingErrorHandler::new());
//! let mut client = ApiClient::new("https://sandbox.safaricom.co.ke/mpesa/c2b/v1/registerurl");
//! client.set_access_token("token");
//! client.set_error_handler(recorder.clone());
//!
//! let request = client.build_authenticated_post_request().with_body(body);
//! let payload = client.execute_and_validate(request).await?;
//!
//! if !recorder.errors().is_empty() {
//!     println!("Daraja returned {}", payload.status_info());
//! }
//! ```

mod api_client;
mod error_handler;
mod errors;
mod http_request;
mod http_response;

pub(crate) use api_client::{build_user_agent, send_request};

pub use api_client::{ApiClient, CONTENT_TYPE_JSON, SDK_VERSION};
pub use error_handler::{
    ConsoleErrorHandler, ErrorHandler, RecordedException, RecordingErrorHandler,
    TracingErrorHandler,
};
pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::ResponsePayload;
