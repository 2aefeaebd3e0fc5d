use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid cardinality: {0} (expected: one|many)")]
    InvalidCardinality(String),

    #[error("invalid resource id: {0}")]
    InvalidId(String),

    #[error("invalid model: {0}")]
    Invalid(String),

    #[error("malformed schema document: {0}")]
    Schema(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
