use onbrd_model::Cardinality;

use crate::metrics::backend::{FetchOutcome, MetricsBackend, ResolveOutcome};

/// No-op metrics backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_resolve(&self, _: &str, _: &str, _: ResolveOutcome) {}

    #[inline(always)]
    fn record_fetch(&self, _: &str, _: Cardinality, _: FetchOutcome, _: u64) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_metrics_is_zero_size() {
        assert_eq!(std::mem::size_of::<NoOpMetrics>(), 0);
    }

    #[test]
    fn noop_can_be_called_repeatedly() {
        let metrics = NoOpMetrics;
        for _ in 0..1000 {
            metrics.record_resolve("Tag", "jobs", ResolveOutcome::Resolved);
            metrics.record_fetch("Job", Cardinality::Many, FetchOutcome::Found, 3);
        }
    }
}
