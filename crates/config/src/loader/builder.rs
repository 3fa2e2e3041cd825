//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layering explicit values over the environment.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::{ExposeSecret, SecretString};

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_API_VERSION, ENV_DOTENV_DISABLED};
use crate::types::Config;

/// Configuration loader that builds config from explicit values and environment variables.
#[derive(Default)]
pub struct ConfigLoader {
    domain: Option<String>,
    api_key: Option<SecretString>,
    api_version: Option<String>,
    base_url: Option<String>,
}

impl ConfigLoader {
    /// Create a new loader with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`ConfigError::DotenvIo`)
    ///
    /// A missing `.env` file is not an error.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Fill in any value not set yet from the environment.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key: String = api_key.into();
        self.api_key = Some(SecretString::new(api_key.into()));
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// - `MissingDomain` / `MissingApiKey` when either is unset or blank.
    /// - `InvalidValue` when the domain is not a single DNS label, the version
    ///   is blank, or the base URL override is not an absolute http(s) URL.
    pub fn build(self) -> Result<Config, ConfigError> {
        let domain = self
            .domain
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .ok_or(ConfigError::MissingDomain)?;
        validate_domain(&domain)?;

        let api_key = self
            .api_key
            .filter(|k| !k.expose_secret().trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let api_version = match self.api_version {
            Some(v) if v.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "api_version".into(),
                    message: "must not be blank (e.g. v5)".into(),
                });
            }
            Some(v) => v.trim().to_string(),
            None => DEFAULT_API_VERSION.to_string(),
        };

        let base_url_override = self
            .base_url
            .as_deref()
            .map(validate_and_normalize_base_url)
            .transpose()?;

        Ok(Config {
            domain,
            api_key,
            api_version,
            base_url_override,
        })
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn domain(&self) -> Option<&String> {
        self.domain.as_ref()
    }

    pub(crate) fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub(crate) fn api_version(&self) -> Option<&String> {
        self.api_version.as_ref()
    }

    pub(crate) fn base_url(&self) -> Option<&String> {
        self.base_url.as_ref()
    }

    pub(crate) fn set_domain(&mut self, domain: Option<String>) {
        self.domain = domain;
    }

    pub(crate) fn set_api_key(&mut self, api_key: Option<SecretString>) {
        self.api_key = api_key;
    }

    pub(crate) fn set_api_version(&mut self, version: Option<String>) {
        self.api_version = version;
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }
}

/// The domain becomes a hostname label, so it must be one.
fn validate_domain(domain: &str) -> Result<(), ConfigError> {
    let valid = !domain.starts_with('-')
        && !domain.ends_with('-')
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            var: "domain".into(),
            message: format!(
                "must be a tenant subdomain made of letters, digits and '-' (e.g. acme), got: {domain}"
            ),
        })
    }
}

/// Validate and normalize a base URL override.
///
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
/// - Normalize by stripping trailing slashes
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!("must be an absolute http(s) URL with a host: {e}"),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
