//! Data models for BoardsOnFire API records.
//!
//! Every record keeps the fields this crate knows about as typed options and
//! carries everything else in a flattened `extra` map, so fields added by the
//! server survive a decode and re-encode.

mod common;
mod datasources;
mod entities;
mod organizations;
mod users;

pub use common::ObjectId;
pub use datasources::DataObject;
pub use entities::EntityObject;
pub use organizations::Organization;
pub use users::User;
