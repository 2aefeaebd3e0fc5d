use thiserror::Error;

/// Failure reported by a fetch collaborator.
///
/// These are transient or transport-level conditions owned by the collaborator.
/// Accessors pass them through without retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out after {0} ms")]
    Timeout(u64),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("fetch failed: {0}")]
    Other(String),
}

impl FetchError {
    /// Low-cardinality label carried by [`crate::FetchOutcome::Failure`].
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Timeout(_) => "timeout",
            FetchError::Decode(_) => "decode",
            FetchError::Other(_) => "other",
        }
    }
}
