use std::sync::Arc;

use tracing::{info, warn};

use onbrd_core::{
    MemoryFetcher, ResolveContext,
    catalog::{COMPANY, JOB, TAG, public_catalog},
    registry,
};
use onbrd_model::ResourceInstance;
use onbrd_observe::{LoggerConfig, init_logger};
use onbrd_prometheus::{Encoder, PrometheusMetrics, TextEncoder};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) logger
    let cfg = LoggerConfig::from_env()?;
    init_logger(&cfg)?;
    info!(format = cfg.format.as_str(), level = cfg.level.as_str(), "logger initialized");

    // 2) fetch collaborator with a few sample records
    let fetcher = Arc::new(MemoryFetcher::new().with_records([
        ResourceInstance::new(COMPANY, 7).with_attr("name", "Acme"),
        ResourceInstance::new(JOB, 101)
            .with_attr("title", "Rust backend engineer")
            .with_attr("tag_id", "rust")
            .with_attr("company_id", 7),
        ResourceInstance::new(JOB, 102)
            .with_attr("title", "Systems programmer")
            .with_attr("tag_id", "rust"),
        ResourceInstance::new(JOB, 201)
            .with_attr("title", "Rails developer")
            .with_attr("tag_id", "ruby"),
    ]));

    // 3) metrics + process-wide registry
    let metrics = PrometheusMetrics::new()?;
    let ctx = ResolveContext::new(fetcher).with_metrics(Arc::new(metrics.clone()));
    let registry = registry::init(public_catalog()?, ctx)?;

    // 4) Tag -> jobs
    let tag = ResourceInstance::new(TAG, "rust");
    info!(path = %registry.member_path(&tag)?, "resolving jobs for tag");
    let jobs = registry.resolve(&tag, "jobs")?.fetch_all().await?;
    for job in &jobs {
        info!(id = %job.id, title = ?job.attr("title"), "job");
    }

    // 5) Job -> company
    for job in &jobs {
        match registry.resolve(job, "company")?.fetch_all().await?.first() {
            Some(company) => info!(job = %job.id, company = ?company.attr("name"), "company"),
            None => info!(job = %job.id, "job has no company"),
        }
    }

    // 6) misuse is reported, not swallowed
    if let Err(e) = registry.resolve(&tag, "nonexistent") {
        warn!(error = %e, "expected resolution failure");
    }

    // 7) dump metrics
    let mut buf = Vec::new();
    TextEncoder::new().encode(&metrics.gather(), &mut buf)?;
    println!("{}", String::from_utf8_lossy(&buf));
    Ok(())
}
