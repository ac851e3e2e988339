//! Configuration types for the Daraja API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for communication with the Daraja API.
//!
//! # Overview
//!
//! - [`DarajaConfig`]: The configuration struct holding all SDK settings
//! - [`DarajaConfigBuilder`]: A builder for constructing [`DarajaConfig`] instances
//! - [`ConsumerKey`]: A validated consumer key newtype
//! - [`ConsumerSecret`]: A validated consumer secret newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//! - [`Environment`]: The Daraja deployment to talk to
//!
//! # Example
//!
//! ```rust
//! use daraja_api::{DarajaConfig, ConsumerKey, ConsumerSecret, Environment};
//!
//! let config = DarajaConfig::builder()
//!     .consumer_key(ConsumerKey::new("my-key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("my-secret").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://sandbox.safaricom.co.ke");
//! ```

mod environment;
mod newtypes;

pub use environment::{Environment, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};
pub use newtypes::{BaseUrl, ConsumerKey, ConsumerSecret};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the Daraja API SDK.
///
/// Holds the consumer credentials used for OAuth, the target environment and
/// transport settings shared by every client built from it.
///
/// # Thread Safety
///
/// `DarajaConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct DarajaConfig {
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    environment: Environment,
    base_url: BaseUrl,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl DarajaConfig {
    /// Creates a new builder for constructing a `DarajaConfig`.
    #[must_use]
    pub fn builder() -> DarajaConfigBuilder {
        DarajaConfigBuilder::new()
    }

    /// Returns the consumer key.
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret.
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }

    /// Returns the environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the base URL resolved from the environment.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the transport timeout, if configured.
    ///
    /// No timeout is applied by default.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify DarajaConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DarajaConfig>();
};

/// Builder for constructing [`DarajaConfig`] instances.
///
/// Required fields are `consumer_key` and `consumer_secret`.
///
/// # Defaults
///
/// - `environment`: [`Environment::Sandbox`]
/// - `timeout`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct DarajaConfigBuilder {
    consumer_key: Option<ConsumerKey>,
    consumer_secret: Option<ConsumerSecret>,
    environment: Option<Environment>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl DarajaConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the consumer key (required).
    #[must_use]
    pub fn consumer_key(mut self, key: ConsumerKey) -> Self {
        self.consumer_key = Some(key);
        self
    }

    /// Sets the consumer secret (required).
    #[must_use]
    pub fn consumer_secret(mut self, secret: ConsumerSecret) -> Self {
        self.consumer_secret = Some(secret);
        self
    }

    /// Sets the environment.
    #[must_use]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Points the SDK at a custom base URL.
    ///
    /// Shorthand for `environment(Environment::Custom(url))`.
    #[must_use]
    pub fn base_url(self, url: BaseUrl) -> Self {
        self.environment(Environment::Custom(url))
    }

    /// Sets a transport timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`DarajaConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `consumer_key` or
    /// `consumer_secret` are not set.
    pub fn build(self) -> Result<DarajaConfig, ConfigError> {
        let consumer_key = self.consumer_key.ok_or(ConfigError::MissingRequiredField {
            field: "consumer_key",
        })?;
        let consumer_secret = self
            .consumer_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_secret",
            })?;

        let environment = self.environment.unwrap_or_default();
        let base_url = BaseUrl::new(environment.url())?;

        Ok(DarajaConfig {
            consumer_key,
            consumer_secret,
            environment,
            base_url,
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
