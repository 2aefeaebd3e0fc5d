//! Prometheus metrics backend for relationship resolution.
//!
//! [`PrometheusMetrics`] implements [`onbrd_core::MetricsBackend`]; inject it through
//! [`onbrd_core::ResolveContext::with_metrics`].
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use onbrd_core::{MemoryFetcher, ResolveContext};
//! use onbrd_prometheus::PrometheusMetrics;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let ctx = ResolveContext::new(Arc::new(MemoryFetcher::new()))
//!     .with_metrics(Arc::new(metrics.clone()));
//! # let _ = ctx;
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `onbrd_resolutions_total{owner, relationship, outcome}` - Counter
//! - `onbrd_fetches_total{target, cardinality, outcome, error}` - Counter
//! - `onbrd_fetch_duration_seconds{target}` - Histogram
//!
//! No HTTP endpoint is provided; expose [`PrometheusMetrics::gather`] through the
//! application's own server.
mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
