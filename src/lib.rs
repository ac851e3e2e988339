//! # Daraja API Rust SDK
//!
//! A Rust SDK for Safaricom's Daraja (M-Pesa) API, providing type-safe
//! configuration, OAuth access tokens, and a shared request/response pipeline
//! for the individual API product clients.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`DarajaConfig`] and [`DarajaConfigBuilder`]
//! - Validated newtypes for consumer credentials and base URLs
//! - Sandbox, production, and custom [`Environment`] selection
//! - Client credentials access tokens via [`auth::oauth`]
//! - A base [`ApiClient`] that builds authenticated requests, executes them,
//!   and reports unsuccessful responses through a pluggable [`ErrorHandler`]
//! - Customer-to-Business endpoints via [`c2b`]
//!
//! ## Quick Start
//!
//! ```rust
//! use daraja_api::{DarajaConfig, ConsumerKey, ConsumerSecret, Environment};
//!
//! let config = DarajaConfig::builder()
//!     .consumer_key(ConsumerKey::new("your-consumer-key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("your-consumer-secret").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://sandbox.safaricom.co.ke");
//! ```
//!
//! ## Authenticating and Calling C2B
//!
//! ```rust,ignore
//! use daraja_api::auth::oauth::OAuthClient;
//! use daraja_api::c2b::{C2bClient, CommandId, SimulateRequest};
//!
//! let token = OAuthClient::new(&config).authenticate().await?;
//!
//! let mut client = C2bClient::simulate_client(&config);
//! token.apply_to(client.base_mut());
//!
//! let response = client
//!     .simulate(&SimulateRequest {
//!         short_code: "600000".to_string(),
//!         command_id: CommandId::CustomerPayBillOnline,
//!         amount: 10,
//!         msisdn: "254708374149".to_string(),
//!         bill_ref_number: Some("invoice-42".to_string()),
//!     })
//!     .await;
//!
//! match response {
//!     Some(response) => println!("{:?}", response.response_description()),
//!     None => println!("Request failed; see the error handler output"),
//! }
//! ```
//!
//! ## Error Reporting
//!
//! Unsuccessful status codes and missing bodies do not abort a call. They are
//! sent to the client's [`ErrorHandler`], which defaults to
//! [`ConsoleErrorHandler`]. Route them elsewhere per client:
//!
//! ```rust
//! use std::sync::Arc;
//! use daraja_api::{ApiClient, RecordingErrorHandler, ResponsePayload};
//!
//! let recorder = Arc::new(RecordingErrorHandler::new());
//! let mut client = ApiClient::new("https://sandbox.safaricom.co.ke/mpesa/c2b/v1/simulate");
//! client.set_error_handler(recorder.clone());
//!
//! client.validate_payload(&ResponsePayload::new(500, "Internal Server Error"));
//!
//! assert_eq!(recorder.errors().len(), 2);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and error handlers are per instance
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod c2b;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::oauth::{OAuthClient, OAuthError};
pub use auth::OAuthResponse;
pub use c2b::{C2bClient, StandardResponse};
pub use config::{
    BaseUrl, ConsumerKey, ConsumerSecret, DarajaConfig, DarajaConfigBuilder, Environment,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiClient, ConsoleErrorHandler, ErrorHandler, HttpError, RecordingErrorHandler,
    ResponsePayload, TracingErrorHandler,
};
