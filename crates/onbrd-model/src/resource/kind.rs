use serde::{Deserialize, Serialize};

use crate::{
    ResourceId, TypeName,
    error::{ModelError, ModelResult},
};

/// A class of remote entities (e.g. `Tag`, `Job`) and the collection endpoint serving them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceType {
    name: TypeName,
    endpoint: String,
}

impl ResourceType {
    /// Create a resource type.
    ///
    /// The endpoint is normalized to a leading `/` without a trailing one,
    /// so `"tags/"` and `"/tags"` describe the same collection.
    pub fn new(name: impl Into<TypeName>, endpoint: impl AsRef<str>) -> Self {
        Self {
            name: name.into(),
            endpoint: normalize_endpoint(endpoint.as_ref()),
        }
    }

    /// Type name used as registry key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Collection endpoint, e.g. `/tags`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Endpoint of a single member: `<endpoint>/<id>`.
    pub fn member_path(&self, id: &ResourceId) -> String {
        if self.endpoint == "/" {
            format!("/{id}")
        } else {
            format!("{}/{id}", self.endpoint)
        }
    }

    /// Check structural constraints that the constructor does not enforce.
    pub fn validate(&self) -> ModelResult<()> {
        if self.name.trim().is_empty() {
            return Err(ModelError::Invalid(
                "resource type name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn normalize_endpoint(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_normalized() {
        assert_eq!(ResourceType::new("Tag", "tags").endpoint(), "/tags");
        assert_eq!(ResourceType::new("Tag", "/tags/").endpoint(), "/tags");
        assert_eq!(ResourceType::new("Tag", " /tags ").endpoint(), "/tags");
        assert_eq!(ResourceType::new("Root", "").endpoint(), "/");
    }

    #[test]
    fn member_path_appends_id() {
        let tag = ResourceType::new("Tag", "/tags");
        assert_eq!(tag.member_path(&ResourceId::from("ruby")), "/tags/ruby");

        let job = ResourceType::new("Job", "/jobs/");
        assert_eq!(job.member_path(&ResourceId::Int(42)), "/jobs/42");

        let root = ResourceType::new("Root", "/");
        assert_eq!(root.member_path(&ResourceId::Int(1)), "/1");
    }

    #[test]
    fn validate_rejects_blank_name() {
        assert!(ResourceType::new("Tag", "/tags").validate().is_ok());
        assert!(matches!(
            ResourceType::new("  ", "/tags").validate(),
            Err(ModelError::Invalid(_))
        ));
    }
}
