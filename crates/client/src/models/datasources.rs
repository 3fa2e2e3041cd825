//! Datasource object records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::ObjectId;

/// One row of a datasource.
///
/// `organization_id` and `timestamp` are required when creating or importing rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<ObjectId>,
    /// Kept exactly as sent: a date string or an epoch number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DataObject {
    pub fn new(organization_id: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            organization_id: Some(ObjectId::Text(organization_id.into())),
            timestamp: Some(Value::String(timestamp.into())),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
