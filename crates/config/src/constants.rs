//! Centralized constants for the BoardsOnFire workspace.
//!
//! This module contains default values used across crates to avoid
//! magic string duplication.

// =============================================================================
// Connection Defaults
// =============================================================================

/// API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "v5";

/// Vendor host that tenant subdomains live under.
pub const VENDOR_HOST: &str = "boardsonfireapp.com";

/// Header carrying the static API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Maximum redirects the HTTP client follows.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment Variables
// =============================================================================

/// Tenant subdomain, e.g. `acme` for `acme.boardsonfireapp.com`.
pub const ENV_DOMAIN: &str = "BOARDSONFIRE_DOMAIN";

/// API key sent in the [`API_KEY_HEADER`] header.
pub const ENV_API_KEY: &str = "BOARDSONFIRE_API_KEY";

/// API version path segment (defaults to [`DEFAULT_API_VERSION`]).
pub const ENV_API_VERSION: &str = "BOARDSONFIRE_API_VERSION";

/// Full base URL override. Mostly useful for testing against a mock server.
pub const ENV_BASE_URL: &str = "BOARDSONFIRE_BASE_URL";

/// When set to `true` or `1`, `.env` loading is skipped.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
