use std::fmt;

use crate::{
    fetch::FetcherHandle,
    metrics::{MetricsHandle, noop_metrics},
};

/// Shared dependencies bound into a frozen registry and cloned into every accessor.
#[derive(Clone)]
pub struct ResolveContext {
    fetcher: FetcherHandle,
    metrics: MetricsHandle,
}

impl ResolveContext {
    /// Create a context around a fetch collaborator with no-op metrics.
    pub fn new(fetcher: FetcherHandle) -> Self {
        Self {
            fetcher,
            metrics: noop_metrics(),
        }
    }

    /// Get the fetch collaborator handle.
    pub fn fetcher(&self) -> &FetcherHandle {
        &self.fetcher
    }

    /// Get the metrics backend handle.
    pub fn metrics(&self) -> &MetricsHandle {
        &self.metrics
    }

    /// Replace the metrics backend and return updated context.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }
}

impl fmt::Debug for ResolveContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveContext")
            .field("fetcher", &"<handle>")
            .field("metrics", &"<handle>")
            .finish()
    }
}
