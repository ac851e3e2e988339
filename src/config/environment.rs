//! Daraja deployment environments.
//!
//! This module provides the [`Environment`] enum for selecting which Daraja
//! deployment the SDK talks to.

use crate::config::BaseUrl;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Base URL of the Daraja sandbox.
pub const SANDBOX_BASE_URL: &str = "https://sandbox.safaricom.co.ke";

/// Base URL of the Daraja production deployment.
pub const PRODUCTION_BASE_URL: &str = "https://api.safaricom.co.ke";

/// Daraja deployment environment.
///
/// The sandbox is the default. `Custom` points the SDK at any other base URL,
/// such as a proxy or a local mock server.
///
/// # Example
///
/// ```rust
/// use daraja_api::Environment;
///
/// let env: Environment = "production".parse().unwrap();
/// assert_eq!(env, Environment::Production);
/// assert_eq!(env.url(), "https://api.safaricom.co.ke");
///
/// let env: Environment = "http://localhost:8080".parse().unwrap();
/// assert!(matches!(env, Environment::Custom(_)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// The Daraja sandbox (`https://sandbox.safaricom.co.ke`).
    #[default]
    Sandbox,
    /// The Daraja production API (`https://api.safaricom.co.ke`).
    Production,
    /// Any other base URL.
    Custom(BaseUrl),
}

impl Environment {
    /// Returns the base URL for this environment.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Sandbox => SANDBOX_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
            Self::Custom(url) => url.as_ref(),
        }
    }

    /// Returns `true` for the production deployment.
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandbox => write!(f, "sandbox"),
            Self::Production => write!(f, "production"),
            Self::Custom(url) => write!(f, "{url}"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Self::Sandbox),
            "production" | "live" => Ok(Self::Production),
            _ if trimmed.contains("://") => BaseUrl::new(trimmed).map(Self::Custom),
            _ => Err(ConfigError::InvalidEnvironment {
                value: trimmed.to_string(),
            }),
        }
    }
}
