//! Declarative schema documents consumed by registry loaders.
//!
//! A document lists resource types and, per type, the relationships it owns:
//!
//! ```json
//! {
//!   "types": [
//!     { "name": "Tag", "endpoint": "/tags",
//!       "relationships": [ { "name": "jobs", "cardinality": "has_many", "target": "Job" } ] },
//!     { "name": "Job", "endpoint": "/jobs" }
//!   ]
//! }
//! ```
//!
//! Cardinality is kept as text here and parsed when the document is applied,
//! so a bad value surfaces as an invalid-cardinality error at declaration time.
use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{
    Cardinality, RelationshipDecl, ResourceType,
    error::{ModelError, ModelResult},
};

/// Top-level schema document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SchemaDoc {
    #[serde(default)]
    pub types: Vec<TypeSchema>,
}

/// One resource type and the relationships it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TypeSchema {
    pub name: String,
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<RelationshipSchema>,
}

/// Relationship entry as written in a schema document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RelationshipSchema {
    pub name: String,
    /// `one`, `many`, `has_one`, `has_many` or `belongs_to`.
    pub cardinality: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,
}

impl SchemaDoc {
    /// Parse a JSON schema document.
    pub fn from_json_str(s: &str) -> ModelResult<Self> {
        serde_json::from_str(s).map_err(|e| ModelError::Schema(e.to_string()))
    }
}

impl TypeSchema {
    /// Resource type described by this entry.
    pub fn resource_type(&self) -> ResourceType {
        ResourceType::new(self.name.clone(), &self.endpoint)
    }

    /// Declarations owned by this type, in document order.
    pub fn declarations(&self) -> ModelResult<Vec<RelationshipDecl>> {
        self.relationships
            .iter()
            .map(|r| r.to_decl(&self.name))
            .collect()
    }
}

impl RelationshipSchema {
    /// Convert into a declaration owned by `owner`.
    pub fn to_decl(&self, owner: &str) -> ModelResult<RelationshipDecl> {
        let cardinality: Cardinality = self.cardinality.parse()?;
        let decl = RelationshipDecl::new(owner, self.name.clone(), cardinality, self.target.clone());
        Ok(match &self.foreign_key {
            Some(fk) => decl.with_foreign_key(fk.clone()),
            None => decl,
        })
    }
}
