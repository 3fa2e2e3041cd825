//! Error types for the BoardsOnFire client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during BoardsOnFire client operations.
///
/// `Validation` is raised before any request is sent. `RateLimited` and
/// `NotFound` map the two remote statuses callers usually branch on; every
/// other failure lands in one of the remaining variants.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Write payload is missing required keys or has the wrong shape.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Remote answered 429 Too Many Requests.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Remote answered 404 Not Found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Any other non-success status from the API.
    #[error("Bad response ({status}) at {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    /// A success response whose body is not the JSON we expected.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// HTTP transport error (connect, DNS, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A request could not be built (e.g. a header that is not valid HTTP).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Required client configuration was not provided.
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
}

impl ClientError {
    /// The HTTP status this error stands for, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited => Some(429),
            Self::NotFound(_) => Some(404),
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is a 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this error is a 429.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}
