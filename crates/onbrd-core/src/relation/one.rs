use std::{fmt, time::Instant};

use tracing::{debug, instrument, trace};

use onbrd_model::{Cardinality, ResourceId, ResourceInstance, ResourceType};

use crate::{
    fetch::{FetchError, FetcherHandle},
    metrics::MetricsHandle,
    relation::record_fetch,
};

/// Accessor for a `one` relationship: the target record referenced by a foreign key on the owner.
#[derive(Clone)]
pub struct OneRelation {
    fetcher: FetcherHandle,
    metrics: MetricsHandle,
    target: ResourceType,
    foreign_key: String,
    id: Option<ResourceId>,
}

impl OneRelation {
    pub(crate) fn new(
        fetcher: FetcherHandle,
        metrics: MetricsHandle,
        target: ResourceType,
        foreign_key: String,
        id: Option<ResourceId>,
    ) -> Self {
        Self {
            fetcher,
            metrics,
            target,
            foreign_key,
            id,
        }
    }

    /// Target resource type.
    pub fn target(&self) -> &ResourceType {
        &self.target
    }

    /// Foreign-key attribute read from the owner.
    pub fn foreign_key(&self) -> &str {
        &self.foreign_key
    }

    /// Referenced id, `None` when the owner carries no reference.
    pub fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    /// Fetch the referenced record.
    ///
    /// Absent results are `Ok(None)`. Without a reference on the owner the collaborator is not called.
    #[instrument(level = "debug", skip(self), fields(target_type = %self.target.name(), fk = %self.foreign_key))]
    pub async fn fetch(&self) -> Result<Option<ResourceInstance>, FetchError> {
        let Some(id) = &self.id else {
            trace!("owner has no reference, nothing to fetch");
            return Ok(None);
        };

        let started = Instant::now();
        let res = self.fetcher.fetch_one(self.target.name(), id).await;

        record_fetch(
            &self.metrics,
            &self.target,
            Cardinality::One,
            started,
            &res,
            Option::is_none,
        );
        match &res {
            Ok(record) => debug!(%id, found = record.is_some(), "member fetched"),
            Err(e) => debug!(%id, error = %e, "member fetch failed"),
        }
        res
    }
}

impl fmt::Debug for OneRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneRelation")
            .field("target", &self.target.name())
            .field("foreign_key", &self.foreign_key)
            .field("id", &self.id)
            .finish()
    }
}
