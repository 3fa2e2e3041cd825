//! Datasources command implementation.
//!
//! Responsibilities:
//! - List, fetch, create, import, patch, and delete datasource rows.
//!
//! Does NOT handle:
//! - Checking `organization_id` and `timestamp` on writes (the client rejects
//!   incomplete payloads).
//!
//! Invariants:
//! - `--truncate` is rejected, since datasource imports cannot delete other rows.

use anyhow::{Context, Result, bail};
use boardsonfire_client::{BoardsOnFireClient, ObjectListAllOptions, ObjectListOptions};
use tracing::info;

use super::{ObjectCommand, parse_data, print_json, print_json_line};

pub async fn run(
    client: &BoardsOnFireClient,
    datasource: &str,
    command: ObjectCommand,
    compact: bool,
) -> Result<()> {
    let datasources = client.datasources();

    match command {
        ObjectCommand::List {
            organizations,
            page_size,
            page,
            order,
            group,
            filter,
        } => {
            let rows = datasources
                .list(
                    datasource,
                    ObjectListOptions {
                        organizations,
                        page_size,
                        page,
                        order,
                        group,
                        filter,
                    },
                )
                .await
                .with_context(|| format!("Failed to list rows of datasource {datasource}"))?;
            print_json(&rows, compact)
        }
        ObjectCommand::ListAll {
            limit,
            organizations,
            order,
            group,
            filter,
        } => {
            let mut stream = datasources.list_all(
                datasource,
                ObjectListAllOptions {
                    limit,
                    organizations,
                    order,
                    group,
                    filter,
                },
            );
            let mut count = 0usize;
            while let Some(row) = stream
                .next()
                .await
                .with_context(|| format!("Failed to list rows of datasource {datasource}"))?
            {
                print_json_line(&row)?;
                count += 1;
            }
            info!(datasource, count, "Listed datasource rows");
            Ok(())
        }
        ObjectCommand::Get { id } => {
            let row = datasources
                .get(datasource, &id)
                .await
                .with_context(|| format!("Failed to get {datasource} row {id}"))?;
            print_json(&row, compact)
        }
        ObjectCommand::Create { data } => {
            let payload = parse_data(&data)?;
            let created = datasources
                .create(datasource, &payload)
                .await
                .with_context(|| format!("Failed to create {datasource} row"))?;
            print_json(&created, compact)
        }
        ObjectCommand::Upsert { data, truncate } => {
            if truncate {
                bail!("--truncate is only supported for entities");
            }
            let payload = parse_data(&data)?;
            let ids = datasources
                .upsert(datasource, &payload)
                .await
                .with_context(|| format!("Failed to import {datasource} rows"))?;
            print_json(&ids, compact)
        }
        ObjectCommand::Update { id, data } => {
            let payload = parse_data(&data)?;
            let updated = datasources
                .update(datasource, &id, &payload)
                .await
                .with_context(|| format!("Failed to update {datasource} row {id}"))?;
            print_json(&updated, compact)
        }
        ObjectCommand::Delete { id } => {
            datasources
                .delete(datasource, &id)
                .await
                .with_context(|| format!("Failed to delete {datasource} row {id}"))?;
            info!(datasource, id = %id, "Deleted datasource row");
            Ok(())
        }
    }
}
