//! OAuth-specific error types for the Daraja API SDK.
//!
//! # Example
//!
//! ```rust
//! use daraja_api::auth::oauth::OAuthError;
//!
//! let error = OAuthError::AuthenticationFailed {
//!     status: 400,
//!     message: "Invalid Authentication passed".to_string(),
//! };
//! assert!(error.to_string().contains("400"));
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Errors that can occur while obtaining an access token.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The token request failed or was rejected.
    ///
    /// `status` is 0 when the exchange never completed (network failure).
    #[error("Authentication failed with status {status}: {message}")]
    AuthenticationFailed {
        /// The HTTP status code returned, or 0 for network errors.
        status: u16,
        /// The error message from the response or transport.
        message: String,
    },

    /// Wrapped HTTP client error.
    #[error(transparent)]
    HttpError(#[from] HttpError),
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};
