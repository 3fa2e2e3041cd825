//! Required-key checks for write payloads.
//!
//! Responsibilities:
//! - Check a create payload is an object carrying every required key.
//! - Check an upsert payload is an array whose elements all pass the create check.
//! - Turn arbitrary `Serialize` payloads into JSON before checking.
//!
//! Does NOT handle:
//! - Type or format checks on field values. Only key presence is checked.
//!
//! Invariants:
//! - Pure functions. Nothing here touches the network.
//! - Extra keys never cause a failure.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Required keys for one kind of writable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRule {
    /// Object kind used in error messages ("entity", "datasource").
    pub kind: &'static str,
    pub required: &'static [&'static str],
}

/// Entity objects must name their organization.
pub const ENTITY_RULE: ValidationRule = ValidationRule {
    kind: "entity",
    required: &["organization_id"],
};

/// Data objects must name their organization and carry a timestamp.
pub const DATASOURCE_RULE: ValidationRule = ValidationRule {
    kind: "datasource",
    required: &["organization_id", "timestamp"],
};

impl ValidationRule {
    /// Message returned when a required key is missing.
    pub fn missing_keys_message(&self) -> String {
        format!(
            "{} is required to create {} {} object",
            self.required.join(" and "),
            article(self.kind),
            self.kind
        )
    }

    /// Fail unless `payload` is an object holding every required key.
    pub fn validate_create(&self, payload: &Value) -> Result<()> {
        let has_all = payload
            .as_object()
            .is_some_and(|obj| self.required.iter().all(|key| obj.contains_key(*key)));

        if has_all {
            Ok(())
        } else {
            Err(ClientError::Validation(self.missing_keys_message()))
        }
    }

    /// Fail unless `payload` is an array whose elements all pass [`Self::validate_create`].
    pub fn validate_upsert(&self, payload: &Value) -> Result<()> {
        let items = payload.as_array().ok_or_else(|| {
            ClientError::Validation("Data must be a list of dictionaries".to_string())
        })?;

        items.iter().try_for_each(|item| self.validate_create(item))
    }
}

fn article(kind: &str) -> &'static str {
    match kind.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Serialize a caller payload into JSON so it can be checked and sent.
pub(crate) fn to_payload<P: Serialize + ?Sized>(payload: &P) -> Result<Value> {
    serde_json::to_value(payload)
        .map_err(|e| ClientError::Validation(format!("Payload could not be serialized: {e}")))
}
