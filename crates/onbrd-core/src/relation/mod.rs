//! Lazy accessors produced by [`crate::RelationshipRegistry::resolve`].
//!
//! An accessor is a query description bound to a fetch collaborator. Nothing is fetched
//! until [`ManyRelation::fetch`] / [`OneRelation::fetch`] is awaited, and every call
//! issues a fresh request: results are never cached here.
mod many;
pub use many::ManyRelation;

mod one;
pub use one::OneRelation;

use std::time::Instant;

use onbrd_model::{Cardinality, ResourceInstance, ResourceType};

use crate::{
    fetch::FetchError,
    metrics::{FetchOutcome, MetricsHandle},
};

/// Resolved relationship, shaped by its cardinality.
#[derive(Debug, Clone)]
pub enum Relation {
    Many(ManyRelation),
    One(OneRelation),
}

impl Relation {
    /// Cardinality of the underlying declaration.
    pub fn cardinality(&self) -> Cardinality {
        match self {
            Relation::Many(_) => Cardinality::Many,
            Relation::One(_) => Cardinality::One,
        }
    }

    /// Target resource type.
    pub fn target(&self) -> &ResourceType {
        match self {
            Relation::Many(r) => r.target(),
            Relation::One(r) => r.target(),
        }
    }

    /// Fetch the relationship as a sequence regardless of cardinality.
    ///
    /// A `One` relation yields zero or one element.
    pub async fn fetch_all(&self) -> Result<Vec<ResourceInstance>, FetchError> {
        match self {
            Relation::Many(r) => r.fetch().await,
            Relation::One(r) => Ok(r.fetch().await?.into_iter().collect()),
        }
    }

    /// Returns the `Many` accessor, if this is one.
    pub fn into_many(self) -> Option<ManyRelation> {
        match self {
            Relation::Many(r) => Some(r),
            Relation::One(_) => None,
        }
    }

    /// Returns the `One` accessor, if this is one.
    pub fn into_one(self) -> Option<OneRelation> {
        match self {
            Relation::One(r) => Some(r),
            Relation::Many(_) => None,
        }
    }
}

/// Report one fetch to the metrics backend.
fn record_fetch<T>(
    metrics: &MetricsHandle,
    target: &ResourceType,
    cardinality: Cardinality,
    started: Instant,
    res: &Result<T, FetchError>,
    is_empty: impl FnOnce(&T) -> bool,
) {
    let outcome = match res {
        Ok(v) if is_empty(v) => FetchOutcome::Empty,
        Ok(_) => FetchOutcome::Found,
        Err(e) => FetchOutcome::Failure { kind: e.kind() },
    };
    let duration_ms = started.elapsed().as_millis() as u64;
    metrics.record_fetch(target.name(), cardinality, outcome, duration_ms);
}
