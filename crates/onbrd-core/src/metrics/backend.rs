use std::sync::Arc;

use onbrd_model::Cardinality;

/// Label value substituted for names that are not declared in the registry.
pub const UNKNOWN_LABEL: &str = "_unknown";

/// Result of a `resolve` call, for metrics classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Accessor was produced.
    Resolved,
    /// Relationship name not declared on the owner.
    UnknownRelationship,
    /// Declared target type missing from the registry.
    UnknownTargetType,
    /// Owner carries a foreign key that is not an id.
    InvalidForeignKey,
}

impl ResolveOutcome {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            ResolveOutcome::Resolved => "resolved",
            ResolveOutcome::UnknownRelationship => "unknown_relationship",
            ResolveOutcome::UnknownTargetType => "unknown_target_type",
            ResolveOutcome::InvalidForeignKey => "invalid_foreign_key",
        }
    }
}

/// Result of a single accessor fetch, for metrics classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// At least one record came back.
    Found,
    /// Empty sequence or absent record.
    Empty,
    /// The collaborator returned an error of the given kind (see [`crate::FetchError::kind`]).
    Failure { kind: &'static str },
}

impl FetchOutcome {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            FetchOutcome::Found => "found",
            FetchOutcome::Empty => "empty",
            FetchOutcome::Failure { .. } => "failure",
        }
    }

    /// Return the error-kind label value; `"none"` unless the fetch failed.
    #[inline]
    pub fn error_label(&self) -> &'static str {
        match self {
            FetchOutcome::Failure { kind } => kind,
            _ => "none",
        }
    }
}

/// Backend metrics collection interface.
///
/// Implementations are injected via [`crate::ResolveContext`] and shared by every accessor.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record a `resolve` call.
    ///
    /// # Arguments
    /// - `owner`: type name of the owning instance, or [`UNKNOWN_LABEL`] if not registered
    /// - `relationship`: declared relationship name, or [`UNKNOWN_LABEL`] if not declared
    /// - `outcome`: how resolution ended
    fn record_resolve(&self, owner: &str, relationship: &str, outcome: ResolveOutcome);

    /// Record one fetch issued by an accessor.
    ///
    /// # Arguments
    /// - `target`: target type name
    /// - `cardinality`: accessor cardinality
    /// - `outcome`: found / empty / failure
    /// - `duration_ms`: time spent inside the collaborator
    fn record_fetch(
        &self,
        target: &str,
        cardinality: Cardinality,
        outcome: FetchOutcome,
        duration_ms: u64,
    );
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
