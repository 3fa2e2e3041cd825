//! BoardsOnFire CLI - Command-line interface for the BoardsOnFire REST API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute API commands via the shared client library.
//! - Print results as JSON.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout stays valid JSON.

mod args;
mod commands;
mod dispatch;
mod error;

use anyhow::{Context, Result};
use args::Cli;
use boardsonfire_client::BoardsOnFireClient;
use boardsonfire_config::ConfigLoader;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = match build_client(&cli) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    };

    let exit_code = tokio::select! {
        result = run_command(&client, cli.command, cli.compact) => match result {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                eprintln!("{:#}", e);
                e.exit_code()
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Interrupted");
            ExitCode::Interrupted
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// CLI flags first, then the environment for anything still unset.
fn build_client(cli: &Cli) -> Result<BoardsOnFireClient> {
    let mut loader = ConfigLoader::new();
    if let Some(ref domain) = cli.domain {
        loader = loader.with_domain(domain.clone());
    }
    if let Some(ref key) = cli.api_key {
        loader = loader.with_api_key(key.clone());
    }
    if let Some(ref version) = cli.api_version {
        loader = loader.with_api_version(version.clone());
    }
    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }

    let config = loader
        .from_env()
        .build()
        .context("Failed to build configuration")?;

    BoardsOnFireClient::builder()
        .from_config(&config)
        .build()
        .context("Failed to create client")
}
