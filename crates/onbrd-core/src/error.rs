use std::convert::Infallible;

use thiserror::Error;

use onbrd_model::ModelError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("relationship '{name}' is already declared on '{owner}'")]
    DuplicateRelationship { owner: String, name: String },

    #[error("invalid cardinality: {0} (expected: one|many)")]
    InvalidCardinality(String),

    #[error("unknown relationship '{name}' on '{owner}'")]
    UnknownRelationship { owner: String, name: String },

    #[error("relationship '{owner}.{name}' targets unknown resource type '{target}'")]
    UnknownTargetType {
        owner: String,
        name: String,
        target: String,
    },

    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),

    #[error("resource type '{0}' is already registered")]
    DuplicateResourceType(String),

    #[error("relationship '{owner}.{name}': foreign key '{field}' holds a non-id value: {value}")]
    InvalidForeignKey {
        owner: String,
        name: String,
        field: String,
        value: String,
    },

    #[error("relationship registry is already initialized")]
    AlreadyInitialized,

    #[error("relationship registry is not initialized")]
    NotInitialized,

    #[error("model error: {0}")]
    Model(ModelError),
}

impl From<ModelError> for CoreError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::InvalidCardinality(raw) => CoreError::InvalidCardinality(raw),
            other => CoreError::Model(other),
        }
    }
}

impl From<Infallible> for CoreError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_cardinality_is_lifted_out_of_model_errors() {
        let err = CoreError::from(ModelError::InvalidCardinality("lots".into()));
        assert!(matches!(err, CoreError::InvalidCardinality(ref s) if s == "lots"));

        let err = CoreError::from(ModelError::Invalid("x".into()));
        assert!(matches!(err, CoreError::Model(ModelError::Invalid(_))));
    }

    #[test]
    fn messages_name_owner_and_relationship() {
        let err = CoreError::UnknownTargetType {
            owner: "Tag".into(),
            name: "jobs".into(),
            target: "Job".into(),
        };
        assert_eq!(
            err.to_string(),
            "relationship 'Tag.jobs' targets unknown resource type 'Job'"
        );
    }
}
