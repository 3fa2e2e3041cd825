//! Entities command implementation.
//!
//! Responsibilities:
//! - List, fetch, create, import, patch, and delete entity objects.
//!
//! Does NOT handle:
//! - Checking `organization_id` on writes (the client rejects incomplete payloads).

use anyhow::{Context, Result};
use boardsonfire_client::{BoardsOnFireClient, ObjectListAllOptions, ObjectListOptions};
use tracing::info;

use super::{ObjectCommand, parse_data, print_json, print_json_line};

pub async fn run(
    client: &BoardsOnFireClient,
    entity: &str,
    command: ObjectCommand,
    compact: bool,
) -> Result<()> {
    let entities = client.entities();

    match command {
        ObjectCommand::List {
            organizations,
            page_size,
            page,
            order,
            group,
            filter,
        } => {
            let objects = entities
                .list(
                    entity,
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
                .with_context(|| format!("Failed to list objects of entity {entity}"))?;
            print_json(&objects, compact)
        }
        ObjectCommand::ListAll {
            limit,
            organizations,
            order,
            group,
            filter,
        } => {
            let mut stream = entities.list_all(
                entity,
                ObjectListAllOptions {
                    limit,
                    organizations,
                    order,
                    group,
                    filter,
                },
            );
            let mut count = 0usize;
            while let Some(object) = stream
                .next()
                .await
                .with_context(|| format!("Failed to list objects of entity {entity}"))?
            {
                print_json_line(&object)?;
                count += 1;
            }
            info!(entity, count, "Listed entity objects");
            Ok(())
        }
        ObjectCommand::Get { id } => {
            let object = entities
                .get(entity, &id)
                .await
                .with_context(|| format!("Failed to get {entity} object {id}"))?;
            print_json(&object, compact)
        }
        ObjectCommand::Create { data } => {
            let payload = parse_data(&data)?;
            let created = entities
                .create(entity, &payload)
                .await
                .with_context(|| format!("Failed to create {entity} object"))?;
            print_json(&created, compact)
        }
        ObjectCommand::Upsert { data, truncate } => {
            let payload = parse_data(&data)?;
            let ids = entities
                .upsert(entity, &payload, truncate)
                .await
                .with_context(|| format!("Failed to import {entity} objects"))?;
            print_json(&ids, compact)
        }
        ObjectCommand::Update { id, data } => {
            let payload = parse_data(&data)?;
            let updated = entities
                .update(entity, &id, &payload)
                .await
                .with_context(|| format!("Failed to update {entity} object {id}"))?;
            print_json(&updated, compact)
        }
        ObjectCommand::Delete { id } => {
            entities
                .delete(entity, &id)
                .await
                .with_context(|| format!("Failed to delete {entity} object {id}"))?;
            info!(entity, id = %id, "Deleted entity object");
            Ok(())
        }
    }
}
