//! Configuration management for the BoardsOnFire client.
//!
//! This crate provides the connection settings shared by the client library
//! and the CLI, and loads them from `.env` files, environment variables, and
//! explicit builder calls.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::Config;
