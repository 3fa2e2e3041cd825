//! Request/response plumbing shared by every resource collection.
//!
//! Responsibilities:
//! - Describe one API call as an [`ApiRequest`] (verb, endpoint, query, body, headers).
//! - Describe one API answer as a [`ResponseEnvelope`].
//! - Define the [`Transport`] seam that resource collections are generic over.
//! - Classify a raw HTTP status/body pair into an envelope or a [`ClientError`].
//!
//! Does NOT handle:
//! - Building URLs or attaching the API key (see [`crate::client::BoardsOnFireClient`]).
//! - Pagination (see [`crate::pagination`]).
//!
//! Invariants:
//! - Exactly one network call per [`Transport::send`]; nothing is retried.
//! - DELETE responses never have their body decoded and carry no payload.

use std::collections::HashMap;
use std::future::Future;

use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, Result};

/// One call against the API, relative to the client's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, without a leading slash (e.g. `organizations/42`).
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Extra headers merged over the auth header; these win on collision.
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    pub fn patch(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PATCH, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::DELETE, endpoint)
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Uniform wrapper around a successful HTTP response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    /// Always empty for responses built by this crate.
    pub message: String,
    /// Decoded JSON body. Always `None` for DELETE.
    pub payload: Option<Value>,
}

impl ResponseEnvelope {
    pub fn new(status_code: u16, headers: HashMap<String, String>) -> Self {
        Self {
            status_code,
            headers,
            ..Self::default()
        }
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Take the payload, failing if the response carried none.
    pub fn into_payload(self) -> Result<Value> {
        self.payload.ok_or_else(|| {
            ClientError::InvalidResponse("Response does not contain a payload".to_string())
        })
    }

    /// Decode the payload into a typed value.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        let payload = self.into_payload()?;
        serde_json::from_value(payload)
            .map_err(|e| ClientError::InvalidResponse(format!("Unexpected payload shape: {e}")))
    }
}

/// Sends [`ApiRequest`]s and returns [`ResponseEnvelope`]s.
///
/// [`crate::BoardsOnFireClient`] is the HTTP implementation; tests plug in
/// [`crate::testing::MockTransport`]. Uses edition 2024's native `impl Future`
/// in traits, so no `async-trait` macro is required.
pub trait Transport: Send + Sync {
    /// Perform exactly one call.
    ///
    /// # Errors
    ///
    /// - [`ClientError::RateLimited`] on 429
    /// - [`ClientError::NotFound`] on 404
    /// - [`ClientError::Api`] on any other non-2xx status
    /// - [`ClientError::InvalidResponse`] when a 2xx body is not JSON
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ResponseEnvelope>> + Send;
}

/// Turn a raw status/body pair into an envelope or the matching error.
pub(crate) fn classify_response(
    method: &Method,
    status: u16,
    url: &str,
    headers: HashMap<String, String>,
    body: &[u8],
) -> Result<ResponseEnvelope> {
    if (200..300).contains(&status) {
        let envelope = ResponseEnvelope::new(status, headers);
        if *method == Method::DELETE {
            return Ok(envelope);
        }

        let payload: Value = serde_json::from_slice(body).map_err(|_| {
            ClientError::InvalidResponse("Response does not contain valid json".to_string())
        })?;
        return Ok(envelope.with_payload(payload));
    }

    match status {
        429 => Err(ClientError::RateLimited),
        404 => Err(ClientError::NotFound(url.to_string())),
        _ => Err(ClientError::Api {
            status,
            url: url.to_string(),
            message: String::from_utf8_lossy(body).into_owned(),
        }),
    }
}

/// Flatten response headers into a string map.
///
/// Values that are not valid UTF-8 are skipped; for repeated names the last value wins.
pub(crate) fn header_map_to_strings(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use serde_json::json;

    const URL: &str = "https://acme.boardsonfireapp.com/api/v5/users";

    #[test]
    fn test_success_decodes_json_payload() {
        let envelope =
            classify_response(&Method::GET, 200, URL, HashMap::new(), br#"{"data":"test"}"#)
                .unwrap();
        assert_eq!(envelope.status_code, 200);
        assert_eq!(envelope.payload, Some(json!({"data": "test"})));
        assert!(envelope.message.is_empty());
    }

    #[test]
    fn test_success_with_invalid_json_is_invalid_response() {
        let err = classify_response(&Method::GET, 200, URL, HashMap::new(), b"<html>")
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn test_delete_never_decodes_body() {
        let envelope =
            classify_response(&Method::DELETE, 200, URL, HashMap::new(), b"not json").unwrap();
        assert_eq!(envelope.status_code, 200);
        assert!(envelope.payload.is_none());
    }

    #[test]
    fn test_rate_limit_and_not_found() {
        let err = classify_response(&Method::GET, 429, URL, HashMap::new(), b"").unwrap_err();
        assert!(matches!(err, ClientError::RateLimited));

        let err = classify_response(&Method::GET, 404, URL, HashMap::new(), b"").unwrap_err();
        assert!(matches!(err, ClientError::NotFound(ref url) if url == URL));
    }

    #[test]
    fn test_other_status_carries_raw_body() {
        let err =
            classify_response(&Method::POST, 400, URL, HashMap::new(), b"page_size invalid")
                .unwrap_err();
        match err {
            ClientError::Api {
                status, message, ..
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "page_size invalid");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_delete_error_status_is_still_an_error() {
        let err = classify_response(&Method::DELETE, 500, URL, HashMap::new(), b"boom")
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_header_map_to_strings_skips_opaque_values() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static("abc"));
        headers.insert("x-binary", HeaderValue::from_bytes(&[0xfa, 0xfb]).unwrap());

        let flat = header_map_to_strings(&headers);
        assert_eq!(flat.get("x-request-id").map(String::as_str), Some("abc"));
        assert!(!flat.contains_key("x-binary"));
    }

    #[test]
    fn test_envelope_decode_reports_shape_errors() {
        let envelope = ResponseEnvelope::new(200, HashMap::new()).with_payload(json!("text"));
        let err = envelope.decode::<Vec<Value>>().unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn test_envelope_without_payload_fails_to_decode() {
        let err = ResponseEnvelope::new(200, HashMap::new())
            .into_payload()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn test_request_builders() {
        let request = ApiRequest::post("entities/widget/entityobjects/list")
            .with_query(vec![("page".into(), "2".into())])
            .with_header("x-trace", "1");
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.query_param("page"), Some("2"));
        assert_eq!(request.query_param("page_size"), None);
        assert_eq!(request.headers, vec![("x-trace".to_string(), "1".to_string())]);
    }
}
