//! Configuration loader for `.env` files and environment variables.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges explicit values and the environment.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Deriving URLs from the loaded values (see `types.rs`).
//!
//! Invariants / Assumptions:
//! - Builder values take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
