//! Connection configuration types.
//!
//! Responsibilities:
//! - Define the `Config` structure shared by the client and the CLI.
//! - Derive the tenant base URL from domain and API version.
//!
//! Does NOT handle:
//! - Loading values from the environment (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `base_url()` always ends with exactly one `/`.
//! - The API key is only reachable through `ExposeSecret`; `Debug` redacts it.

use secrecy::SecretString;

use crate::constants::{DEFAULT_API_VERSION, VENDOR_HOST};

/// Connection settings for one BoardsOnFire tenant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tenant subdomain (`acme` in `acme.boardsonfireapp.com`).
    pub domain: String,
    /// Static API key.
    pub api_key: SecretString,
    /// API version path segment, e.g. `v5`.
    pub api_version: String,
    /// Full base URL that replaces the derived one when set.
    pub base_url_override: Option<String>,
}

impl Config {
    /// Create a config for `domain` with the default API version.
    pub fn new(domain: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            domain: domain.into(),
            api_key,
            api_version: DEFAULT_API_VERSION.to_string(),
            base_url_override: None,
        }
    }

    /// Builder method to set the API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Builder method to point the client at a different base URL.
    pub fn with_base_url_override(mut self, url: impl Into<String>) -> Self {
        self.base_url_override = Some(url.into());
        self
    }

    /// The URL every endpoint path is appended to.
    ///
    /// `https://{domain}.boardsonfireapp.com/api/{version}/` unless overridden.
    pub fn base_url(&self) -> String {
        match &self.base_url_override {
            Some(url) => format!("{}/", url.trim_end_matches('/')),
            None => format!(
                "https://{}.{}/api/{}/",
                self.domain, VENDOR_HOST, self.api_version
            ),
        }
    }
}
