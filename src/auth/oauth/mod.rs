//! OAuth 2.0 token acquisition for the Daraja API.
//!
//! Daraja only supports the client credentials grant: the app's consumer key
//! and secret are exchanged for a short-lived bearer token.
//!
//! - [`OAuthClient::authenticate`]: Request a new access token
//! - [`OAuthError`]: Failures while obtaining a token
//!
//! The SDK does not refresh tokens. Call [`OAuthClient::authenticate`] again
//! when the token is about to expire and install the new one with
//! [`OAuthResponse::apply_to`](crate::auth::OAuthResponse::apply_to).

mod client_credentials;
mod error;

pub use client_credentials::{OAuthClient, OAUTH_TOKEN_PATH};
pub use error::OAuthError;
