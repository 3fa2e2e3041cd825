//! CLI command implementations.
//!
//! Responsibilities:
//! - Define the subcommands shared by the resource groups.
//! - Turn `--data` arguments into JSON payloads.
//! - Print results as JSON on stdout.
//!
//! Does NOT handle:
//! - Validating payload keys (the client does that before sending).
//!
//! Invariants:
//! - Results go to stdout, logs and errors go to stderr.
//! - `list-all` prints one compact JSON record per line as records arrive.

pub mod datasources;
pub mod entities;
pub mod organizations;
pub mod users;

use std::io::Write;

use anyhow::{Context, Result};
use boardsonfire_client::Direction;
use clap::Subcommand;
use serde::Serialize;
use serde_json::Value;

/// Subcommands for read-only collections (organizations, users).
#[derive(Debug, Subcommand)]
pub enum ReadCommand {
    /// Fetch a single page
    List {
        /// Records per page (clamped to 500)
        #[arg(long)]
        page_size: Option<usize>,
        /// 1-based page number
        #[arg(long)]
        page: Option<usize>,
        /// Field to order by
        #[arg(long)]
        order: Option<String>,
        /// Sort direction (ASC or DESC)
        #[arg(long)]
        direction: Option<Direction>,
    },
    /// Walk every page, printing one record per line
    ListAll {
        /// Stop after this many records (0 means no limit)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Field to order by
        #[arg(long)]
        order: Option<String>,
        /// Sort direction (ASC or DESC)
        #[arg(long)]
        direction: Option<Direction>,
    },
    /// Fetch one record by ID
    Get {
        /// Record ID
        id: String,
    },
}

/// Subcommands for entity objects and datasource rows.
#[derive(Debug, Subcommand)]
pub enum ObjectCommand {
    /// Fetch a single page
    List {
        /// Organization IDs to restrict to (comma-separated)
        #[arg(long, value_delimiter = ',')]
        organizations: Vec<String>,
        /// Records per page (clamped to 500)
        #[arg(long)]
        page_size: Option<usize>,
        /// 1-based page number
        #[arg(long)]
        page: Option<usize>,
        /// Ordering expression (e.g., "timestamp desc")
        #[arg(long)]
        order: Option<String>,
        /// Group filter
        #[arg(long)]
        group: Option<String>,
        /// Filter expression
        #[arg(long)]
        filter: Option<String>,
    },
    /// Walk every page, printing one record per line
    ListAll {
        /// Stop after this many records (0 means no limit)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Organization IDs to restrict to (comma-separated)
        #[arg(long, value_delimiter = ',')]
        organizations: Vec<String>,
        /// Ordering expression
        #[arg(long)]
        order: Option<String>,
        /// Group filter
        #[arg(long)]
        group: Option<String>,
        /// Filter expression
        #[arg(long)]
        filter: Option<String>,
    },
    /// Fetch one record by ID
    Get {
        /// Record ID
        id: String,
    },
    /// Create a record
    Create {
        /// JSON object, or @path to read it from a file
        #[arg(long)]
        data: String,
    },
    /// Insert or update many records and print their IDs
    Upsert {
        /// JSON array, or @path to read it from a file
        #[arg(long)]
        data: String,
        /// Delete every record not in the payload (entities only)
        #[arg(long)]
        truncate: bool,
    },
    /// Patch a record
    Update {
        /// Record ID
        id: String,
        /// JSON object with the fields to change, or @path
        #[arg(long)]
        data: String,
    },
    /// Delete a record
    Delete {
        /// Record ID
        id: String,
    },
}

/// Parse a `--data` argument. A leading `@` names a file to read.
pub(crate) fn parse_data(raw: &str) -> Result<Value> {
    let text = match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file {path}"))?,
        None => raw.to_string(),
    };
    serde_json::from_str(&text).context("--data is not valid JSON")
}

/// Print a value as JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Print one record as a single JSON line on stdout.
pub(crate) fn print_json_line<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
