//! Integration tests for the Daraja API SDK.
//!
//! These tests verify end-to-end functionality of the SDK configuration system.

use std::time::Duration;

use daraja_api::c2b::C2bClient;
use daraja_api::{
    BaseUrl, ConfigError, ConsumerKey, ConsumerSecret, DarajaConfig, Environment, OAuthClient,
};

#[test]
fn test_full_workflow_create_newtypes_build_config_access_fields() {
    let key = ConsumerKey::new("test-consumer-key").unwrap();
    let secret = ConsumerSecret::new("test-consumer-secret").unwrap();

    let config = DarajaConfig::builder()
        .consumer_key(key)
        .consumer_secret(secret)
        .environment(Environment::Production)
        .timeout(Duration::from_secs(30))
        .user_agent_prefix("TestApp/1.0")
        .build()
        .unwrap();

    assert_eq!(config.consumer_key().as_ref(), "test-consumer-key");
    assert_eq!(config.consumer_secret().as_ref(), "test-consumer-secret");
    assert!(config.environment().is_production());
    assert_eq!(config.base_url().as_ref(), "https://api.safaricom.co.ke");
    assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    assert_eq!(config.user_agent_prefix(), Some("TestApp/1.0"));
}

#[test]
fn test_sandbox_is_the_default_environment() {
    let config = DarajaConfig::builder()
        .consumer_key(ConsumerKey::new("key").unwrap())
        .consumer_secret(ConsumerSecret::new("secret").unwrap())
        .build()
        .unwrap();

    assert_eq!(config.environment(), &Environment::Sandbox);
    assert_eq!(
        OAuthClient::new(&config).token_url(),
        "https://sandbox.safaricom.co.ke/oauth/v1/generate"
    );
    assert_eq!(
        C2bClient::register_url_client(&config).base().url(),
        "https://sandbox.safaricom.co.ke/mpesa/c2b/v1/registerurl"
    );
}

#[test]
fn test_environment_from_string_drives_endpoints() {
    let environment: Environment = "http://localhost:8080/".parse().unwrap();

    let config = DarajaConfig::builder()
        .consumer_key(ConsumerKey::new("key").unwrap())
        .consumer_secret(ConsumerSecret::new("secret").unwrap())
        .environment(environment)
        .build()
        .unwrap();

    assert_eq!(
        C2bClient::simulate_client(&config).base().url(),
        "http://localhost:8080/mpesa/c2b/v1/simulate"
    );
}

#[test]
fn test_config_errors_are_descriptive() {
    let missing = DarajaConfig::builder()
        .consumer_key(ConsumerKey::new("key").unwrap())
        .build()
        .unwrap_err();
    assert!(matches!(
        missing,
        ConfigError::MissingRequiredField {
            field: "consumer_secret"
        }
    ));

    assert!(matches!(
        ConsumerKey::new(""),
        Err(ConfigError::EmptyConsumerKey)
    ));
    assert!(matches!(
        BaseUrl::new("ftp://example.com"),
        Err(ConfigError::InvalidBaseUrl { .. })
    ));
    assert!(matches!(
        "staging".parse::<Environment>(),
        Err(ConfigError::InvalidEnvironment { .. })
    ));
}

#[test]
fn test_secrets_are_masked_in_debug_output() {
    let config = DarajaConfig::builder()
        .consumer_key(ConsumerKey::new("key").unwrap())
        .consumer_secret(ConsumerSecret::new("super-secret-value").unwrap())
        .build()
        .unwrap();

    assert!(!format!("{config:?}").contains("super-secret-value"));
    assert!(!format!("{:?}", OAuthClient::new(&config)).contains("super-secret-value"));
}
