//! Authentication types for the Daraja API SDK.
//!
//! Every payment endpoint expects an `Authorization: Bearer <token>` header.
//! Tokens come from the [`oauth`] module and are handed to an
//! [`ApiClient`](crate::clients::ApiClient) through its explicit setter.
//!
//! # Example
//!
//! ```rust
//! use daraja_api::auth::OAuthResponse;
//! use daraja_api::clients::ApiClient;
//!
//! let token = OAuthResponse {
//!     access_token: "access-token".to_string(),
//!     expires_in: Some("3599".to_string()),
//! };
//!
//! let mut client = ApiClient::new("https://sandbox.safaricom.co.ke/mpesa/c2b/v1/simulate");
//! token.apply_to(&mut client);
//! assert_eq!(client.access_token(), "access-token");
//! ```

pub mod oauth;
mod token;

pub use token::OAuthResponse;
