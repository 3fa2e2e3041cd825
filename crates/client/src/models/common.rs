//! Types shared by several resource kinds.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Identifier as the API sent it.
///
/// Depending on the object kind the API returns IDs as JSON strings or JSON
/// numbers. The original form is kept, so a decoded record re-encodes to the
/// same JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectId {
    Text(String),
    Number(Number),
}

impl ObjectId {
    /// The string form, when the API sent a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

/// Renders both forms the same way, e.g. for building endpoint paths.
impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for ObjectId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ObjectId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<u64> for ObjectId {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for ObjectId {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}
