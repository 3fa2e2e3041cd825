//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use boardsonfire_client::ClientError;

/// Structured exit codes for the `boardsonfire` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure, including bad configuration.
    GeneralError = 1,

    /// Authentication failure - the API key was rejected (HTTP 401).
    AuthenticationFailed = 2,

    /// Connection error - network, DNS, or TLS failure.
    ///
    /// Scripts may retry with exponential backoff.
    ConnectionError = 3,

    /// Resource not found - organization, user, object, or row.
    NotFound = 4,

    /// Validation error - incomplete payload or a request the API rejected as bad.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - HTTP 403.
    PermissionDenied = 6,

    /// Rate limited - HTTP 429 Too Many Requests.
    ///
    /// Scripts should back off and retry later.
    RateLimited = 7,

    /// Service unavailable - HTTP 502, 503, or 504.
    ServiceUnavailable = 8,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Validation(_) => ExitCode::ValidationError,
            ClientError::InvalidRequest(_) => ExitCode::ValidationError,
            ClientError::InvalidResponse(_) => ExitCode::GeneralError,

            ClientError::RateLimited => ExitCode::RateLimited,
            ClientError::NotFound(_) => ExitCode::NotFound,

            ClientError::Api { status: 400, .. } => ExitCode::ValidationError,
            ClientError::Api { status: 422, .. } => ExitCode::ValidationError,
            ClientError::Api { status: 401, .. } => ExitCode::AuthenticationFailed,
            ClientError::Api { status: 403, .. } => ExitCode::PermissionDenied,
            ClientError::Api {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,
            ClientError::Api { .. } => ExitCode::GeneralError,

            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::Http(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::MissingConfig(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
