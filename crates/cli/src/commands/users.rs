//! Users command implementation.

use anyhow::{Context, Result};
use boardsonfire_client::{BoardsOnFireClient, ListAllOptions, ListOptions};
use tracing::info;

use super::{ReadCommand, print_json, print_json_line};

pub async fn run(client: &BoardsOnFireClient, command: ReadCommand, compact: bool) -> Result<()> {
    let users = client.users();

    match command {
        ReadCommand::List {
            page_size,
            page,
            order,
            direction,
        } => {
            let listed = users
                .list(ListOptions {
                    page_size,
                    page,
                    order,
                    direction,
                })
                .await
                .context("Failed to list users")?;
            print_json(&listed, compact)
        }
        ReadCommand::ListAll {
            limit,
            order,
            direction,
        } => {
            let mut stream = users.list_all(ListAllOptions {
                limit,
                order,
                direction,
            });
            let mut count = 0usize;
            while let Some(user) = stream
                .next()
                .await
                .context("Failed to list users")?
            {
                print_json_line(&user)?;
                count += 1;
            }
            info!(count, "Listed users");
            Ok(())
        }
        ReadCommand::Get { id } => {
            let user = users
                .get(&id)
                .await
                .with_context(|| format!("Failed to get user {id}"))?;
            print_json(&user, compact)
        }
    }
}
