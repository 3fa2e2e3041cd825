//! Environment variable tests for the configuration loader.
//!
//! Responsibilities:
//! - Test that environment variables fill unset values.
//! - Test that builder values take precedence over the environment.
//! - Test handling of empty and whitespace-only environment variables.

use secrecy::ExposeSecret;
use serial_test::serial;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;

const ALL_VARS: [&str; 4] = [
    "BOARDSONFIRE_DOMAIN",
    "BOARDSONFIRE_API_KEY",
    "BOARDSONFIRE_API_VERSION",
    "BOARDSONFIRE_BASE_URL",
];

fn cleared() -> Vec<(&'static str, Option<&'static str>)> {
    ALL_VARS.iter().map(|v| (*v, None)).collect()
}

#[test]
#[serial]
fn test_from_env_reads_all_values() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars(
        [
            ("BOARDSONFIRE_DOMAIN", Some("acme")),
            ("BOARDSONFIRE_API_KEY", Some("env-key")),
            ("BOARDSONFIRE_API_VERSION", Some("v6")),
            ("BOARDSONFIRE_BASE_URL", Some("http://localhost:9000")),
        ],
        || {
            let config = ConfigLoader::new().from_env().build().unwrap();
            assert_eq!(config.domain, "acme");
            assert_eq!(config.api_key.expose_secret(), "env-key");
            assert_eq!(config.api_version, "v6");
            assert_eq!(config.base_url(), "http://localhost:9000/");
        },
    );
}

#[test]
#[serial]
fn test_builder_values_take_precedence_over_env() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars(
        [
            ("BOARDSONFIRE_DOMAIN", Some("from-env")),
            ("BOARDSONFIRE_API_KEY", Some("env-key")),
        ],
        || {
            let config = ConfigLoader::new()
                .with_domain("from-flag")
                .from_env()
                .build()
                .unwrap();
            assert_eq!(config.domain, "from-flag");
            assert_eq!(config.api_key.expose_secret(), "env-key");
        },
    );
}

#[test]
#[serial]
fn test_missing_env_leaves_defaults() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars(cleared(), || {
        let config = ConfigLoader::new()
            .with_domain("acme")
            .with_api_key("k")
            .from_env()
            .build()
            .unwrap();
        assert_eq!(config.api_version, "v5");
        assert!(config.base_url_override.is_none());
    });
}

#[test]
#[serial]
fn test_whitespace_env_is_treated_as_unset() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars(
        [
            ("BOARDSONFIRE_DOMAIN", Some("acme")),
            ("BOARDSONFIRE_API_KEY", Some("k")),
            ("BOARDSONFIRE_API_VERSION", Some("   ")),
        ],
        || {
            let config = ConfigLoader::new().from_env().build().unwrap();
            assert_eq!(config.api_version, "v5");
        },
    );
}

#[test]
#[serial]
fn test_env_var_or_none_trims() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_var("BOARDSONFIRE_DOMAIN", Some("  acme  "), || {
        assert_eq!(
            env_var_or_none("BOARDSONFIRE_DOMAIN"),
            Some("acme".to_string())
        );
    });
    temp_env::with_var("BOARDSONFIRE_DOMAIN", Some(""), || {
        assert_eq!(env_var_or_none("BOARDSONFIRE_DOMAIN"), None);
    });
}
