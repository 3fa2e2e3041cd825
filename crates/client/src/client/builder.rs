//! Client builder for constructing [`BoardsOnFireClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (domain, API key)
//! - Deriving and checking the tenant base URL
//! - Configuring the underlying HTTP client (redirects, user agent)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`BoardsOnFireClient`] in `mod.rs`)
//! - Reading configuration from the environment (see `boardsonfire_config::ConfigLoader`)
//!
//! # Invariants
//! - `domain` and `api_key` are required before calling `build()`
//! - Without an override, the base URL host is `{domain}.boardsonfireapp.com`, compared case-insensitively
//! - No request timeout is configured

use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use boardsonfire_config::Config;
use boardsonfire_config::constants::{DEFAULT_API_VERSION, DEFAULT_MAX_REDIRECTS, VENDOR_HOST};

use crate::client::BoardsOnFireClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`BoardsOnFireClient`].
///
/// # Example
///
/// ```rust,ignore
/// use boardsonfire_client::BoardsOnFireClient;
///
/// let client = BoardsOnFireClient::builder()
///     .domain("acme")
///     .api_key("my-key")
///     .api_version("v5")
///     .build()?;
/// ```
#[derive(Default)]
pub struct BoardsOnFireClientBuilder {
    domain: Option<String>,
    api_key: Option<SecretString>,
    api_version: Option<String>,
    base_url: Option<String>,
}

impl BoardsOnFireClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tenant subdomain (`acme` for `acme.boardsonfireapp.com`).
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the static API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key: String = api_key.into();
        self.api_key = Some(SecretString::new(api_key.into()));
        self
    }

    /// Set the API version path segment. Default is `v5`.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Replace the derived base URL, e.g. to point at a mock server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.domain = Some(config.domain.clone());
        self.api_key = Some(config.api_key.clone());
        self.api_version = Some(config.api_version.clone());
        self.base_url = config.base_url_override.clone();
        self
    }

    /// Build the [`BoardsOnFireClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingConfig`] if `domain` or `api_key` was not provided.
    /// Returns [`ClientError::InvalidUrl`] if the base URL does not parse or the
    /// domain does not form the expected host.
    /// Returns [`ClientError::InvalidRequest`] if the API key is not a valid header value.
    /// Returns `ClientError::Http` if the HTTP client fails to build.
    pub fn build(self) -> Result<BoardsOnFireClient> {
        let domain = self
            .domain
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| ClientError::MissingConfig("domain is required".to_string()))?;
        let api_key = self
            .api_key
            .filter(|k| !k.expose_secret().is_empty())
            .ok_or_else(|| ClientError::MissingConfig("api_key is required".to_string()))?;

        let mut config = Config::new(domain, api_key)
            .with_api_version(self.api_version.unwrap_or_else(|| DEFAULT_API_VERSION.to_string()));
        config.base_url_override = self.base_url;

        let base_url = config.base_url();
        let parsed = url::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if config.base_url_override.is_none() {
            let expected_host = format!("{}.{}", config.domain, VENDOR_HOST);
            // Hosts come back lowercased from the parser.
            let host_matches = parsed
                .host_str()
                .is_some_and(|host| host.eq_ignore_ascii_case(&expected_host));
            if !host_matches {
                return Err(ClientError::InvalidUrl(format!(
                    "domain '{}' does not form the host {expected_host}",
                    config.domain
                )));
            }
        }

        let mut auth_header = HeaderValue::from_str(config.api_key.expose_secret()).map_err(|_| {
            ClientError::InvalidRequest("API key contains characters not allowed in a header".to_string())
        })?;
        auth_header.set_sensitive(true);

        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .user_agent(concat!("boardsonfire-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(BoardsOnFireClient {
            http,
            config,
            base_url,
            auth_header,
        })
    }
}
