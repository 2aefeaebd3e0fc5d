use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use tracing::trace;

use onbrd_model::{Filter, ResourceId, ResourceInstance, TypeName};

use crate::fetch::{FetchError, Fetcher};

/// A single request observed by [`MemoryFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCall {
    Collection { target: TypeName, filter: Filter },
    One { target: TypeName, id: ResourceId },
}

/// In-memory fetch collaborator.
///
/// Records are grouped by type name and matched by exact JSON equality on the
/// filtered attribute. Every request is journaled so callers can check what was
/// asked for and how often.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    records: HashMap<TypeName, Vec<ResourceInstance>>,
    calls: Mutex<Vec<FetchCall>>,
}

impl MemoryFetcher {
    /// Create an empty fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record under its own type name.
    pub fn insert(&mut self, record: ResourceInstance) -> &mut Self {
        self.records
            .entry(record.type_name.clone())
            .or_default()
            .push(record);
        self
    }

    /// Add several records and return the fetcher.
    pub fn with_records<I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = ResourceInstance>,
    {
        for r in records {
            self.insert(r);
        }
        self
    }

    /// Snapshot of every request served so far, oldest first.
    pub fn calls(&self) -> Vec<FetchCall> {
        self.journal().clone()
    }

    /// Number of requests served so far.
    pub fn call_count(&self) -> usize {
        self.journal().len()
    }

    fn journal(&self) -> MutexGuard<'_, Vec<FetchCall>> {
        // The journal holds plain data; a poisoned lock still has a usable value.
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Fetcher for MemoryFetcher {
    async fn fetch_collection(
        &self,
        target_type: &str,
        filter: &Filter,
    ) -> Result<Vec<ResourceInstance>, FetchError> {
        self.journal().push(FetchCall::Collection {
            target: target_type.to_string(),
            filter: filter.clone(),
        });

        let out: Vec<ResourceInstance> = self
            .records
            .get(target_type)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| {
                        r.attr(&filter.field)
                            .is_some_and(|v| filter.value.matches(v))
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        trace!(target_type, %filter, matched = out.len(), "memory collection fetch");
        Ok(out)
    }

    async fn fetch_one(
        &self,
        target_type: &str,
        id: &ResourceId,
    ) -> Result<Option<ResourceInstance>, FetchError> {
        self.journal().push(FetchCall::One {
            target: target_type.to_string(),
            id: id.clone(),
        });

        let found = self
            .records
            .get(target_type)
            .and_then(|records| records.iter().find(|r| &r.id == id))
            .cloned();

        trace!(target_type, %id, found = found.is_some(), "memory member fetch");
        Ok(found)
    }
}
