use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ResourceId;

/// Equality predicate handed to the fetch collaborator: `field == value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Attribute name on the target type (usually a foreign key).
    pub field: String,
    /// Identifier the attribute must equal.
    pub value: ResourceId,
}

impl Filter {
    /// Create a new equality filter.
    pub fn new(field: impl Into<String>, value: impl Into<ResourceId>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.field, self.value)
    }
}
