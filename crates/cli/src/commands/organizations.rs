//! Organizations command implementation.

use anyhow::{Context, Result};
use boardsonfire_client::{BoardsOnFireClient, ListAllOptions, ListOptions};
use tracing::info;

use super::{ReadCommand, print_json, print_json_line};

pub async fn run(client: &BoardsOnFireClient, command: ReadCommand, compact: bool) -> Result<()> {
    let organizations = client.organizations();

    match command {
        ReadCommand::List {
            page_size,
            page,
            order,
            direction,
        } => {
            let orgs = organizations
                .list(ListOptions {
                    page_size,
                    page,
                    order,
                    direction,
                })
                .await
                .context("Failed to list organizations")?;
            print_json(&orgs, compact)
        }
        ReadCommand::ListAll {
            limit,
            order,
            direction,
        } => {
            let mut stream = organizations.list_all(ListAllOptions {
                limit,
                order,
                direction,
            });
            let mut count = 0usize;
            while let Some(org) = stream
                .next()
                .await
                .context("Failed to list organizations")?
            {
                print_json_line(&org)?;
                count += 1;
            }
            info!(count, "Listed organizations");
            Ok(())
        }
        ReadCommand::Get { id } => {
            let org = organizations
                .get(&id)
                .await
                .with_context(|| format!("Failed to get organization {id}"))?;
            print_json(&org, compact)
        }
    }
}
