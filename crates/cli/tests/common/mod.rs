//! Shared test utilities for boardsonfire CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (domain, API key, base URL).
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `BOARDSONFIRE_API_KEY` is set to "test-key" unless overridden.

use assert_cmd::Command;

pub const TEST_API_KEY: &str = "test-key";

/// Returns a hermetic `boardsonfire` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Domain and API key are set to dummy values to satisfy config validation.
/// - Other env vars are cleared to ensure no leakage from the host.
pub fn boardsonfire_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("boardsonfire");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("BOARDSONFIRE_DOMAIN", "acme");
    cmd.env("BOARDSONFIRE_API_KEY", TEST_API_KEY);

    cmd.env_remove("BOARDSONFIRE_BASE_URL")
        .env_remove("BOARDSONFIRE_API_VERSION")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic command pointed at a mock server's `/api/v5` root.
#[allow(dead_code)]
pub fn boardsonfire_cmd_with_server(server_uri: &str) -> Command {
    let mut cmd = boardsonfire_cmd();
    cmd.env("BOARDSONFIRE_BASE_URL", format!("{server_uri}/api/v5"));
    cmd
}
