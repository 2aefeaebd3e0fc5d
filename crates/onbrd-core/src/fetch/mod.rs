//! Seam to the remote data source.
//!
//! The registry never talks to the network. It assembles a target type name plus a
//! [`Filter`] (or an id) and hands them to a [`Fetcher`]. Errors produced by the fetcher
//! are returned to the caller unchanged.
mod error;
pub use error::FetchError;

mod memory;
pub use memory::{FetchCall, MemoryFetcher};

use std::sync::Arc;

use async_trait::async_trait;
use onbrd_model::{Filter, ResourceId, ResourceInstance};

/// Fetch collaborator used by relationship accessors.
#[async_trait]
pub trait Fetcher: Send + Sync + 'static {
    /// Fetch every record of `target_type` matching `filter`.
    ///
    /// An empty result is `Ok(vec![])`, never an error.
    async fn fetch_collection(
        &self,
        target_type: &str,
        filter: &Filter,
    ) -> Result<Vec<ResourceInstance>, FetchError>;

    /// Fetch a single record of `target_type` by id.
    ///
    /// A missing record is `Ok(None)`, never an error.
    async fn fetch_one(
        &self,
        target_type: &str,
        id: &ResourceId,
    ) -> Result<Option<ResourceInstance>, FetchError>;
}

/// Shared handle to a fetch collaborator.
///
/// Cloned into every accessor produced by the registry.
pub type FetcherHandle = Arc<dyn Fetcher>;
