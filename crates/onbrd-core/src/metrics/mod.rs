//! Metrics collection abstraction for relationship resolution.
//!
//! Backends (prometheus, statsd, etc) implement [`MetricsBackend`] and are injected
//! via [`crate::ResolveContext`].
mod backend;
pub use backend::{FetchOutcome, MetricsBackend, MetricsHandle, ResolveOutcome, UNKNOWN_LABEL};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
