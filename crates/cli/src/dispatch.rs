//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use boardsonfire_client::BoardsOnFireClient;

use crate::args::Commands;
use crate::commands;

/// Dispatch a parsed command to its handler.
pub(crate) async fn run_command(
    client: &BoardsOnFireClient,
    command: Commands,
    compact: bool,
) -> Result<()> {
    match command {
        Commands::Organizations { command } => {
            commands::organizations::run(client, command, compact).await
        }
        Commands::Users { command } => commands::users::run(client, command, compact).await,
        Commands::Entities { name, command } => {
            commands::entities::run(client, &name, command, compact).await
        }
        Commands::Datasources { name, command } => {
            commands::datasources::run(client, &name, command, compact).await
        }
    }
}
