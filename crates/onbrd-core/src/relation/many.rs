use std::{fmt, time::Instant};

use tracing::{debug, instrument};

use onbrd_model::{Cardinality, Filter, ResourceInstance, ResourceType};

use crate::{
    fetch::{FetchError, FetcherHandle},
    metrics::MetricsHandle,
    relation::record_fetch,
};

/// Accessor for a `many` relationship: target records whose foreign key equals the owner id.
#[derive(Clone)]
pub struct ManyRelation {
    fetcher: FetcherHandle,
    metrics: MetricsHandle,
    target: ResourceType,
    filter: Filter,
}

impl ManyRelation {
    pub(crate) fn new(
        fetcher: FetcherHandle,
        metrics: MetricsHandle,
        target: ResourceType,
        filter: Filter,
    ) -> Self {
        Self {
            fetcher,
            metrics,
            target,
            filter,
        }
    }

    /// Target resource type.
    pub fn target(&self) -> &ResourceType {
        &self.target
    }

    /// Filter sent to the collaborator.
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Issue the collection query.
    ///
    /// Returns exactly what the collaborator yields; an empty sequence is not an error.
    /// Calling this again re-issues the query.
    #[instrument(level = "debug", skip(self), fields(target_type = %self.target.name(), filter = %self.filter))]
    pub async fn fetch(&self) -> Result<Vec<ResourceInstance>, FetchError> {
        let started = Instant::now();
        let res = self
            .fetcher
            .fetch_collection(self.target.name(), &self.filter)
            .await;

        record_fetch(
            &self.metrics,
            &self.target,
            Cardinality::Many,
            started,
            &res,
            Vec::is_empty,
        );
        match &res {
            Ok(records) => debug!(count = records.len(), "collection fetched"),
            Err(e) => debug!(error = %e, "collection fetch failed"),
        }
        res
    }
}

impl fmt::Debug for ManyRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManyRelation")
            .field("target", &self.target.name())
            .field("filter", &self.filter)
            .finish()
    }
}
