//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate connection settings (see `boardsonfire_config::ConfigLoader`).

use clap::{Parser, Subcommand};

use crate::commands::{ObjectCommand, ReadCommand};

#[derive(Parser)]
#[command(name = "boardsonfire")]
#[command(about = "BoardsOnFire CLI - Query and update a BoardsOnFire tenant from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  boardsonfire --domain acme organizations list\n  boardsonfire users list-all --limit 250\n  boardsonfire entities widget get e-501\n  boardsonfire datasources daily_sales list --organizations 1,2 --filter \"revenue > 100\"\n  boardsonfire entities widget create --data '{\"organization_id\": \"123456\", \"name\": \"X\"}'\n"
)]
pub struct Cli {
    /// Tenant subdomain (e.g., acme for acme.boardsonfireapp.com)
    #[arg(short, long, global = true, env = "BOARDSONFIRE_DOMAIN")]
    pub domain: Option<String>,

    /// API key sent in the x-api-key header
    #[arg(short = 'k', long, global = true, env = "BOARDSONFIRE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API version path segment (default: v5)
    #[arg(long, global = true, env = "BOARDSONFIRE_API_VERSION")]
    pub api_version: Option<String>,

    /// Full base URL replacing the derived tenant URL
    #[arg(long, global = true, env = "BOARDSONFIRE_BASE_URL")]
    pub base_url: Option<String>,

    /// Print JSON on a single line instead of pretty-printing
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List and fetch organizations
    Organizations {
        #[command(subcommand)]
        command: ReadCommand,
    },

    /// List and fetch users
    Users {
        #[command(subcommand)]
        command: ReadCommand,
    },

    /// Manage the objects of a configurable entity
    Entities {
        /// Entity name (e.g., widget)
        name: String,

        #[command(subcommand)]
        command: ObjectCommand,
    },

    /// Manage the rows of a datasource
    Datasources {
        /// Datasource name (e.g., daily_sales)
        name: String,

        #[command(subcommand)]
        command: ObjectCommand,
    },
}
