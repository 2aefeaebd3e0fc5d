use serde::{Deserialize, Serialize};

use crate::{
    Cardinality, TypeName, default_foreign_key,
    error::{ModelError, ModelResult},
};

/// Named, typed relationship from an owning resource type to a target resource type.
///
/// The target is referenced by name only; it does not need to be registered when the
/// declaration is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipDecl {
    /// Owning resource type.
    pub owner: TypeName,
    /// Relationship name, unique per owner (e.g. `"jobs"`).
    pub name: String,
    /// One or many.
    pub cardinality: Cardinality,
    /// Target resource type.
    pub target: TypeName,
    /// Explicit foreign key; see [`RelationshipDecl::foreign_key`] for the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,
}

impl RelationshipDecl {
    /// Create a declaration with the conventional foreign key.
    pub fn new(
        owner: impl Into<TypeName>,
        name: impl Into<String>,
        cardinality: Cardinality,
        target: impl Into<TypeName>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            cardinality,
            target: target.into(),
            foreign_key: None,
        }
    }

    /// `owner has_many name -> target`.
    pub fn has_many(
        owner: impl Into<TypeName>,
        name: impl Into<String>,
        target: impl Into<TypeName>,
    ) -> Self {
        Self::new(owner, name, Cardinality::Many, target)
    }

    /// `owner has_one name -> target`.
    pub fn has_one(
        owner: impl Into<TypeName>,
        name: impl Into<String>,
        target: impl Into<TypeName>,
    ) -> Self {
        Self::new(owner, name, Cardinality::One, target)
    }

    /// Override the foreign key.
    pub fn with_foreign_key(mut self, fk: impl Into<String>) -> Self {
        self.foreign_key = Some(fk.into());
        self
    }

    /// Effective foreign key.
    ///
    /// - `Many`: field on the target records pointing at the owner, default `<owner>_id`.
    /// - `One`: field on the owner record pointing at the target, default `<target>_id`.
    pub fn foreign_key(&self) -> String {
        match (&self.foreign_key, self.cardinality) {
            (Some(fk), _) => fk.clone(),
            (None, Cardinality::Many) => default_foreign_key(&self.owner),
            (None, Cardinality::One) => default_foreign_key(&self.target),
        }
    }

    /// Check structural constraints that the constructor does not enforce.
    pub fn validate(&self) -> ModelResult<()> {
        if self.owner.trim().is_empty() {
            return Err(ModelError::Invalid("relationship owner must not be empty".into()));
        }
        if self.name.trim().is_empty() {
            return Err(ModelError::Invalid(format!(
                "relationship name on '{}' must not be empty",
                self.owner
            )));
        }
        if self.target.trim().is_empty() {
            return Err(ModelError::Invalid(format!(
                "relationship '{}.{}' has an empty target",
                self.owner, self.name
            )));
        }
        if matches!(&self.foreign_key, Some(fk) if fk.trim().is_empty()) {
            return Err(ModelError::Invalid(format!(
                "relationship '{}.{}' has an empty foreign key",
                self.owner, self.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn many_defaults_to_owner_foreign_key() {
        let decl = RelationshipDecl::has_many("Tag", "jobs", "Job");
        assert_eq!(decl.cardinality, Cardinality::Many);
        assert_eq!(decl.foreign_key(), "tag_id");
    }

    #[test]
    fn one_defaults_to_target_foreign_key() {
        let decl = RelationshipDecl::has_one("Job", "company", "Company");
        assert_eq!(decl.foreign_key(), "company_id");
    }

    #[test]
    fn explicit_foreign_key_wins() {
        let decl = RelationshipDecl::has_many("Tag", "jobs", "Job").with_foreign_key("tags");
        assert_eq!(decl.foreign_key(), "tags");
    }

    #[test]
    fn validate_rejects_blank_parts() {
        assert!(RelationshipDecl::has_many("Tag", "jobs", "Job").validate().is_ok());

        let bad = [
            RelationshipDecl::has_many("", "jobs", "Job"),
            RelationshipDecl::has_many("Tag", " ", "Job"),
            RelationshipDecl::has_many("Tag", "jobs", ""),
            RelationshipDecl::has_many("Tag", "jobs", "Job").with_foreign_key(""),
        ];
        for decl in bad {
            assert!(
                matches!(decl.validate(), Err(ModelError::Invalid(_))),
                "expected Invalid for {decl:?}"
            );
        }
    }

    #[test]
    fn serde_roundtrip_keeps_optional_foreign_key() {
        let decl = RelationshipDecl::has_many("Tag", "jobs", "Job");
        let json = serde_json::to_string(&decl).unwrap();
        assert!(!json.contains("foreignKey"));

        let back: RelationshipDecl = serde_json::from_str(&json).unwrap();
        assert_eq!(back, decl);
    }
}
