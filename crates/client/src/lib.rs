//! BoardsOnFire REST API client.
//!
//! This crate provides a typed async client for the BoardsOnFire REST API:
//! organizations, users, entity objects, and datasource rows. It attaches the
//! static API key, walks paginated listings lazily, checks write payloads
//! before sending them, and maps HTTP statuses to [`ClientError`] variants.
//!
//! ```rust,ignore
//! use boardsonfire_client::{BoardsOnFireClient, ObjectListAllOptions};
//!
//! let client = BoardsOnFireClient::new("acme", "my-key")?;
//! let mut rows = client
//!     .datasources()
//!     .list_all("daily_sales", ObjectListAllOptions::new().limit(250));
//! while let Some(row) = rows.next().await? {
//!     println!("{row:?}");
//! }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod pagination;
pub mod path;
pub mod resources;
pub mod transport;
pub mod validation;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::BoardsOnFireClient;
pub use client::builder::BoardsOnFireClientBuilder;
pub use error::{ClientError, Result};
pub use models::{DataObject, EntityObject, ObjectId, Organization, User};
pub use pagination::{Direction, MAX_PAGE_SIZE, PageRequest, PageStream};
pub use resources::{
    DataSources, Entities, ListAllOptions, ListOptions, ObjectListAllOptions, ObjectListOptions,
    Organizations, Users,
};
pub use transport::{ApiRequest, ResponseEnvelope, Transport};
pub use validation::{DATASOURCE_RULE, ENTITY_RULE, ValidationRule};
