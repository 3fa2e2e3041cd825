//! BoardsOnFire REST API client.
//!
//! This module provides [`BoardsOnFireClient`], the HTTP implementation of
//! [`Transport`], and the accessors for the four resource collections.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Endpoint paths and parameters (see [`crate::resources`])
//! - Status classification (see [`crate::transport`])
//!
//! # Invariants
//! - Every request carries the `x-api-key` header. Caller headers with the
//!   same name replace it.
//! - Exactly one HTTP call per [`Transport::send`]. Nothing is retried.
//! - The API key is never logged.

pub mod builder;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use boardsonfire_config::Config;
use boardsonfire_config::constants::API_KEY_HEADER;

use crate::error::{ClientError, Result};
use crate::resources::{DataSources, Entities, Organizations, Users};
use crate::transport::{
    ApiRequest, ResponseEnvelope, Transport, classify_response, header_map_to_strings,
};

pub use builder::BoardsOnFireClientBuilder;

/// BoardsOnFire REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use boardsonfire_client::BoardsOnFireClient;
///
/// let client = BoardsOnFireClient::builder()
///     .domain("acme")
///     .api_key("my-key")
///     .build()?;
///
/// let orgs = client.organizations().list(Default::default()).await?;
/// ```
#[derive(Debug)]
pub struct BoardsOnFireClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: Config,
    pub(crate) base_url: String,
    /// Prebuilt `x-api-key` value, marked sensitive.
    pub(crate) auth_header: HeaderValue,
}

impl BoardsOnFireClient {
    /// Create a new client builder.
    pub fn builder() -> BoardsOnFireClientBuilder {
        BoardsOnFireClientBuilder::new()
    }

    /// Create a client for `domain` with the default API version.
    ///
    /// # Errors
    ///
    /// See [`BoardsOnFireClientBuilder::build`].
    pub fn new(domain: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::builder().domain(domain).api_key(api_key).build()
    }

    /// The URL every endpoint path is appended to. Always ends with `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn organizations(&self) -> Organizations<'_, Self> {
        Organizations::new(self)
    }

    pub fn users(&self) -> Users<'_, Self> {
        Users::new(self)
    }

    pub fn entities(&self) -> Entities<'_, Self> {
        Entities::new(self)
    }

    pub fn datasources(&self) -> DataSources<'_, Self> {
        DataSources::new(self)
    }

    /// Auth header first, then caller headers on top.
    fn request_headers(&self, extra: &[(String, String)]) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, self.auth_header.clone());

        for (name, value) in extra {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ClientError::InvalidRequest(format!("Invalid header name: {name}")))?;
            let header_value = HeaderValue::from_str(value).map_err(|_| {
                ClientError::InvalidRequest(format!("Invalid value for header {name}"))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

impl Transport for BoardsOnFireClient {
    async fn send(&self, request: ApiRequest) -> Result<ResponseEnvelope> {
        let url = format!("{}{}", self.base_url, request.endpoint);
        let headers = self.request_headers(&request.headers)?;

        debug!(method = %request.method, endpoint = %request.endpoint, "Sending request");

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .headers(headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let response_headers = header_map_to_strings(response.headers());
        let body = response.bytes().await?;

        debug!(
            method = %request.method,
            endpoint = %request.endpoint,
            status,
            "Received response"
        );

        classify_response(&request.method, status, &url, response_headers, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BoardsOnFireClient {
        BoardsOnFireClient::new("acme", "secret-key").unwrap()
    }

    #[test]
    fn test_auth_header_is_always_present() {
        let headers = client().request_headers(&[]).unwrap();
        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "secret-key");
    }

    #[test]
    fn test_caller_headers_win_on_collision() {
        let headers = client()
            .request_headers(&[
                ("X-Api-Key".to_string(), "override".to_string()),
                ("x-trace-id".to_string(), "t-1".to_string()),
            ])
            .unwrap();
        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "override");
        assert_eq!(headers.get("x-trace-id").unwrap(), "t-1");
        assert_eq!(headers.get_all(API_KEY_HEADER).iter().count(), 1);
    }

    #[test]
    fn test_invalid_caller_header_is_rejected() {
        let err = client()
            .request_headers(&[("bad header".to_string(), "v".to_string())])
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));

        let err = client()
            .request_headers(&[("x-ok".to_string(), "line\nbreak".to_string())])
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[test]
    fn test_debug_does_not_leak_api_key() {
        let rendered = format!("{:?}", client());
        assert!(!rendered.contains("secret-key"));
    }
}
