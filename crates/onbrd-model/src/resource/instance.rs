use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Attributes, ResourceId, TypeName, error::ModelResult};

/// A materialized record of a resource type.
///
/// Instances are produced by the fetch collaborator and are never cached by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInstance {
    /// Name of the resource type this record belongs to.
    #[serde(rename = "type")]
    pub type_name: TypeName,
    /// Record identifier.
    pub id: ResourceId,
    /// Remaining attributes as returned by the API.
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl ResourceInstance {
    /// Create an instance without attributes.
    pub fn new(type_name: impl Into<TypeName>, id: impl Into<ResourceId>) -> Self {
        Self {
            type_name: type_name.into(),
            id: id.into(),
            attributes: Attributes::new(),
        }
    }

    /// Set an attribute and return the updated instance.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    /// Get an attribute value, if present.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Read an attribute as a reference to another resource.
    ///
    /// A missing attribute and an explicit `null` both yield `Ok(None)`.
    pub fn reference(&self, key: &str) -> ModelResult<Option<ResourceId>> {
        match self.attributes.get(key) {
            Some(value) => ResourceId::from_value(value),
            None => Ok(None),
        }
    }
}
