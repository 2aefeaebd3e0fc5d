pub mod catalog;
pub mod error;
pub mod fetch;
pub mod metrics;
pub mod registry;
pub mod relation;

pub use error::CoreError;
pub use fetch::{FetchCall, FetchError, Fetcher, FetcherHandle, MemoryFetcher};
pub use metrics::{
    FetchOutcome, MetricsBackend, MetricsHandle, NoOpMetrics, ResolveOutcome, UNKNOWN_LABEL, noop_metrics,
};
pub use registry::{DanglingRelationship, RegistryBuilder, RelationshipRegistry, ResolveContext};
pub use relation::{ManyRelation, OneRelation, Relation};

pub mod prelude {
    pub use crate::error::CoreError;
    pub use crate::fetch::{FetchError, Fetcher, FetcherHandle};
    pub use crate::registry::{RegistryBuilder, RelationshipRegistry, ResolveContext};
    pub use crate::relation::Relation;
}
