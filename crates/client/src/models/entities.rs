//! Entity object records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::ObjectId;

/// One object of a configurable entity.
///
/// `organization_id` is required when creating or importing objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<ObjectId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EntityObject {
    /// Start a new object for `organization_id` with no other fields.
    pub fn new(organization_id: impl Into<String>) -> Self {
        Self {
            organization_id: Some(ObjectId::Text(organization_id.into())),
            ..Self::default()
        }
    }

    /// Set an extra field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
