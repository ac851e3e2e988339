//! HTTP-specific error types for the Daraja API SDK.
//!
//! Only failures that stop an exchange from completing are errors here.
//! Unsuccessful status codes and missing bodies are reported through the
//! client's [`ErrorHandler`](crate::clients::ErrorHandler) instead, and the
//! payload is still returned.
//!
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type for a request that produced no payload
//!
//! # Example
//!
//! ```rust,ignore
//! use daraja_api::clients::HttpError;
//!
//! match client.execute_and_validate(request).await {
//!     Ok(payload) => println!("Status {}", payload.status_info()),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// ```rust
/// use daraja_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request has no target URL.
    #[error("Cannot send a request without a URL.")]
    MissingUrl,
}

/// Unified error type for requests that did not produce a payload.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, connection, or response stream error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
