//! Customer-to-Business (C2B) endpoints.
//!
//! C2B covers payments made by customers to an organization's paybill or
//! till number. Two endpoints are supported:
//!
//! - `POST /mpesa/c2b/v1/registerurl`: register confirmation and validation URLs
//! - `POST /mpesa/c2b/v1/simulate`: simulate a customer payment in the sandbox
//!
//! Each [`C2bClient`] targets exactly one endpoint. Responses are mapped into
//! a [`StandardResponse`]; failures are reported through the client's
//! [`ErrorHandler`](crate::clients::ErrorHandler) rather than returned.
//!
//! # Example
//!
//! ```rust,ignore
//! use daraja_api::c2b::{C2bClient, RegisterUrlRequest, ResponseType};
//!
//! let mut client = C2bClient::register_url_client(&config);
//! client.set_access_token(token.access_token.clone());
//!
//! let response = client
//!     .register_url(&RegisterUrlRequest {
//!         short_code: "600000".to_string(),
//!         response_type: ResponseType::Completed,
//!         confirmation_url: "https://example.com/confirm".to_string(),
//!         validation_url: "https://example.com/validate".to_string(),
//!     })
//!     .await;
//! ```

mod client;
mod types;

pub use client::{C2bClient, C2B_EXCEPTION_MESSAGE, C2B_REGISTER_URL_PATH, C2B_SIMULATE_PATH};
pub use types::{CommandId, RegisterUrlRequest, ResponseType, SimulateRequest, StandardResponse};
