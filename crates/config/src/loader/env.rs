//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read BoardsOnFire environment variables into a `ConfigLoader`.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Invariants:
//! - Values already set on the loader are never overwritten.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use secrecy::SecretString;

use super::builder::ConfigLoader;
use crate::constants::{ENV_API_KEY, ENV_API_VERSION, ENV_BASE_URL, ENV_DOMAIN};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Fill every unset loader field from its environment variable.
pub fn apply_env(loader: &mut ConfigLoader) {
    if loader.domain().is_none() {
        loader.set_domain(env_var_or_none(ENV_DOMAIN));
    }
    if !loader.has_api_key() {
        loader.set_api_key(env_var_or_none(ENV_API_KEY).map(|k| SecretString::new(k.into())));
    }
    if loader.api_version().is_none() {
        loader.set_api_version(env_var_or_none(ENV_API_VERSION));
    }
    if loader.base_url().is_none() {
        loader.set_base_url(env_var_or_none(ENV_BASE_URL));
    }
}
