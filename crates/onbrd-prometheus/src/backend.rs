use std::sync::Arc;

use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry, proto::MetricFamily};

use onbrd_core::{FetchOutcome, MetricsBackend, ResolveOutcome};
use onbrd_model::Cardinality;

/// Prometheus implementation of [`MetricsBackend`].
///
/// ## Label cardinality
/// - `owner`, `relationship`, `target`: registered names, otherwise [`onbrd_core::UNKNOWN_LABEL`]
/// - `outcome`: fixed sets from [`ResolveOutcome`] / [`FetchOutcome`]
/// - `error`: [`onbrd_core::FetchError::kind`] values, `"none"` on success
/// - `cardinality`: "one", "many"
#[derive(Clone)]
pub struct PrometheusMetrics {
    resolutions: CounterVec,
    fetches: CounterVec,
    fetch_duration: HistogramVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Create the backend and register its collectors in `registry`.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let resolutions = CounterVec::new(
            Opts::new("resolutions_total", "Relationship resolutions by outcome")
                .namespace("onbrd"),
            &["owner", "relationship", "outcome"],
        )?;
        registry.register(Box::new(resolutions.clone()))?;

        let fetches = CounterVec::new(
            Opts::new("fetches_total", "Accessor fetches by outcome").namespace("onbrd"),
            &["target", "cardinality", "outcome", "error"],
        )?;
        registry.register(Box::new(fetches.clone()))?;

        let fetch_duration = HistogramVec::new(
            HistogramOpts::new(
                "fetch_duration_seconds",
                "Time spent in the fetch collaborator",
            )
            .namespace("onbrd")
            .buckets(vec![0.005, 0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
            &["target"],
        )?;
        registry.register(Box::new(fetch_duration.clone()))?;

        Ok(Self {
            resolutions,
            fetches,
            fetch_duration,
            registry,
        })
    }

    /// Create the backend with a fresh registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metrics for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Underlying registry, for registering application metrics alongside.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_resolve(&self, owner: &str, relationship: &str, outcome: ResolveOutcome) {
        self.resolutions
            .with_label_values(&[owner, relationship, outcome.as_label()])
            .inc();
    }

    fn record_fetch(
        &self,
        target: &str,
        cardinality: Cardinality,
        outcome: FetchOutcome,
        duration_ms: u64,
    ) {
        self.fetches
            .with_label_values(&[
                target,
                cardinality.as_str(),
                outcome.as_label(),
                outcome.error_label(),
            ])
            .inc();
        self.fetch_duration
            .with_label_values(&[target])
            .observe(duration_ms as f64 / 1000.0);
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use onbrd_core::{
        FetchError, Fetcher, MemoryFetcher, RegistryBuilder, ResolveContext, UNKNOWN_LABEL,
    };
    use onbrd_model::{Filter, ResourceId, ResourceInstance, ResourceType};

    use super::*;

    fn family<'a>(families: &'a [MetricFamily], name: &str) -> &'a MetricFamily {
        families
            .iter()
            .find(|f| f.name() == name)
            .unwrap_or_else(|| panic!("metric {name} not found"))
    }

    #[test]
    fn record_resolve_splits_by_labels() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_resolve("Tag", "jobs", ResolveOutcome::Resolved);
        metrics.record_resolve("Tag", "jobs", ResolveOutcome::Resolved);
        metrics.record_resolve("Tag", "posts", ResolveOutcome::UnknownRelationship);

        let families = metrics.gather();
        let resolutions = family(&families, "onbrd_resolutions_total");
        assert_eq!(resolutions.get_metric().len(), 2);
    }

    #[test]
    fn record_fetch_updates_counter_and_histogram() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_fetch("Job", Cardinality::Many, FetchOutcome::Found, 120);
        metrics.record_fetch("Job", Cardinality::Many, FetchOutcome::Empty, 30);
        metrics.record_fetch(
            "Company",
            Cardinality::One,
            FetchOutcome::Failure { kind: "timeout" },
            5,
        );
        metrics.record_fetch(
            "Company",
            Cardinality::One,
            FetchOutcome::Failure { kind: "transport" },
            5,
        );

        let families = metrics.gather();
        assert_eq!(family(&families, "onbrd_fetches_total").get_metric().len(), 4);
        assert_eq!(
            family(&families, "onbrd_fetch_duration_seconds").get_metric().len(),
            2
        );
    }

    #[test]
    fn can_use_custom_registry() {
        let registry = Arc::new(Registry::new());
        let metrics = PrometheusMetrics::new_with_registry(registry.clone()).unwrap();

        metrics.record_resolve("Tag", "jobs", ResolveOutcome::Resolved);
        assert!(!registry.gather().is_empty());
    }

    #[test]
    fn registering_twice_in_one_registry_fails() {
        let registry = Arc::new(Registry::new());
        let _first = PrometheusMetrics::new_with_registry(registry.clone()).unwrap();
        assert!(PrometheusMetrics::new_with_registry(registry).is_err());
    }

    fn label<'a>(m: &'a prometheus::proto::Metric, name: &str) -> &'a str {
        m.get_label()
            .iter()
            .find(|l| l.name() == name)
            .map(|l| l.value())
            .unwrap_or_default()
    }

    fn tag_and_job(ctx: ResolveContext) -> onbrd_core::RelationshipRegistry {
        let mut b = RegistryBuilder::new();
        b.register_type(ResourceType::new("Tag", "/tags"))
            .unwrap()
            .register_type(ResourceType::new("Job", "/jobs"))
            .unwrap()
            .declare_has_many("Tag", "jobs", "Job")
            .unwrap();
        b.build(ctx)
    }

    #[test]
    fn undeclared_names_do_not_grow_resolution_series() {
        let metrics = PrometheusMetrics::new().unwrap();
        let registry = tag_and_job(
            ResolveContext::new(Arc::new(MemoryFetcher::new()))
                .with_metrics(Arc::new(metrics.clone())),
        );

        for i in 0..500 {
            let instance = ResourceInstance::new(format!("T{i}"), i);
            assert!(registry.resolve(&instance, &format!("n{i}")).is_err());
            let tag = ResourceInstance::new("Tag", i);
            assert!(registry.resolve(&tag, &format!("n{i}")).is_err());
        }
        registry
            .resolve(&ResourceInstance::new("Tag", 1), "jobs")
            .unwrap();

        let families = metrics.gather();
        let series = family(&families, "onbrd_resolutions_total").get_metric();
        assert_eq!(series.len(), 3);

        let unknown_owner = series
            .iter()
            .find(|m| label(m, "owner") == UNKNOWN_LABEL)
            .expect("unknown owner series");
        assert_eq!(label(unknown_owner, "relationship"), UNKNOWN_LABEL);
        assert_eq!(unknown_owner.get_counter().value(), 500.0);

        let unknown_on_tag = series
            .iter()
            .find(|m| label(m, "owner") == "Tag" && label(m, "relationship") == UNKNOWN_LABEL)
            .expect("unknown relationship on Tag series");
        assert_eq!(unknown_on_tag.get_counter().value(), 500.0);
    }

    #[tokio::test]
    async fn failed_fetch_is_labelled_with_error_kind() {
        struct TimesOut;

        #[async_trait]
        impl Fetcher for TimesOut {
            async fn fetch_collection(
                &self,
                _: &str,
                _: &Filter,
            ) -> Result<Vec<ResourceInstance>, FetchError> {
                Err(FetchError::Timeout(2_000))
            }

            async fn fetch_one(
                &self,
                _: &str,
                _: &ResourceId,
            ) -> Result<Option<ResourceInstance>, FetchError> {
                Ok(None)
            }
        }

        let metrics = PrometheusMetrics::new().unwrap();
        let registry = tag_and_job(
            ResolveContext::new(Arc::new(TimesOut)).with_metrics(Arc::new(metrics.clone())),
        );

        let err = registry
            .resolve(&ResourceInstance::new("Tag", "rust"), "jobs")
            .unwrap()
            .fetch_all()
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::Timeout(2_000));

        let families = metrics.gather();
        let series = family(&families, "onbrd_fetches_total").get_metric();
        assert_eq!(series.len(), 1);
        assert_eq!(label(&series[0], "target"), "Job");
        assert_eq!(label(&series[0], "outcome"), "failure");
        assert_eq!(label(&series[0], "error"), "timeout");
    }
}
