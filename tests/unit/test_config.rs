//! Unit tests for the config module
//!
//! Tests cover:
//! - Loading from an explicit TOML path
//! - Building a TargetConfiguration from config
//! - TOML serialization round trip of defaults

use deploycheck::config::{Config, Credentials, UiConfig};
use deploycheck::errors::ConfigError;
use deploycheck::verifier::TargetConfiguration;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deploycheck.toml");
    fs::write(
        &path,
        r#"
        base_url = "https://angelsuccess.up.railway.app/"
        realtime_timeout_secs = 30
        pass_threshold_percent = 90

        [credentials]
        email = "qa@example.com"
        password = "hunter2"
        "#,
    )
    .unwrap();

    let config = Config::load(path.to_str()).unwrap();
    assert_eq!(config.realtime_timeout_secs, 30);
    assert_eq!(config.pass_threshold_percent, 90);
    assert_eq!(
        config.credentials,
        Credentials {
            email: "qa@example.com".to_string(),
            password: "hunter2".to_string(),
        }
    );
    assert_eq!(config.ui, UiConfig::default());
}

#[test]
fn test_load_missing_explicit_path_errors() {
    let err = Config::load(Some("/no/such/deploycheck.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_target_from_config() {
    let config = Config {
        base_url: "https://example.com//".to_string(),
        timeout_secs: 4,
        realtime_timeout_secs: 8,
        pause_ms: 250,
        ..Config::default()
    };
    let target = TargetConfiguration::from_config(&config);
    assert_eq!(target.base_url, "https://example.com");
    assert_eq!(target.timeout, Duration::from_secs(4));
    assert_eq!(target.realtime_timeout, Duration::from_secs(8));
    assert_eq!(target.pause, Duration::from_millis(250));
    assert_eq!(target.credentials, Credentials::default());
}

#[test]
fn test_defaults_serialize_round_trip() {
    let config = Config::default();
    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_empty_file_is_all_defaults() {
    assert_eq!(Config::from_toml("").unwrap(), Config::default());
}
