use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, ModelResult};

/// Identifier of a remote resource.
///
/// The public API mixes numeric identifiers with slugs (tags are addressed as `"ruby"`,
/// `"rust"`, ...), so both shapes are accepted. Serialized untagged: `5` or `"ruby"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// Numeric identifier.
    Int(i64),
    /// Slug or any other textual identifier.
    Str(String),
}

impl ResourceId {
    /// Interpret an attribute value as a reference to another resource.
    ///
    /// - JSON integers and strings become identifiers;
    /// - `null` means "no reference" and yields `Ok(None)`;
    /// - anything else (floats, booleans, arrays, objects) is rejected.
    pub fn from_value(value: &Value) -> ModelResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(ResourceId::Str(s.clone()))),
            Value::Number(n) => n
                .as_i64()
                .map(|v| Some(ResourceId::Int(v)))
                .ok_or_else(|| ModelError::InvalidId(n.to_string())),
            other => Err(ModelError::InvalidId(other.to_string())),
        }
    }

    /// Returns `true` if the attribute value refers to this identifier.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (ResourceId::Int(id), Value::Number(n)) => n.as_i64() == Some(*id),
            (ResourceId::Str(id), Value::String(s)) => id == s,
            _ => false,
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Int(v) => write!(f, "{v}"),
            ResourceId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(v: i64) -> Self {
        ResourceId::Int(v)
    }
}

impl From<i32> for ResourceId {
    fn from(v: i32) -> Self {
        ResourceId::Int(i64::from(v))
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        ResourceId::Str(s.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        ResourceId::Str(s)
    }
}
