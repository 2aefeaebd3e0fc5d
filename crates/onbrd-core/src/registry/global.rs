use std::sync::OnceLock;

use tracing::info;

use crate::{
    error::CoreError,
    registry::{RegistryBuilder, RelationshipRegistry, ResolveContext},
};

/// Process-wide registry, populated once by [`init`].
static REGISTRY: OnceLock<RelationshipRegistry> = OnceLock::new();

/// Freeze `builder` and install it as the process-wide registry.
///
/// Call once during startup, before concurrent readers exist.
/// A second call fails with [`CoreError::AlreadyInitialized`] and leaves the installed registry untouched.
pub fn init(
    builder: RegistryBuilder,
    ctx: ResolveContext,
) -> Result<&'static RelationshipRegistry, CoreError> {
    if REGISTRY.get().is_some() {
        return Err(CoreError::AlreadyInitialized);
    }
    REGISTRY
        .set(builder.build(ctx))
        .map_err(|_| CoreError::AlreadyInitialized)?;

    let registry = global()?;
    info!(types = registry.len(), "relationship registry initialized");
    Ok(registry)
}

/// The process-wide registry.
///
/// Fails with [`CoreError::NotInitialized`] before [`init`] has run.
pub fn global() -> Result<&'static RelationshipRegistry, CoreError> {
    REGISTRY.get().ok_or(CoreError::NotInitialized)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use onbrd_model::{ResourceInstance, ResourceType};

    use super::*;
    use crate::fetch::MemoryFetcher;

    // The slot is process-wide, so the whole lifecycle lives in one test.
    #[test]
    fn init_installs_once() {
        assert!(matches!(global(), Err(CoreError::NotInitialized)));

        let mut b = RegistryBuilder::new();
        b.register_type(ResourceType::new("Tag", "/tags"))
            .unwrap()
            .register_type(ResourceType::new("Job", "/jobs"))
            .unwrap()
            .declare_has_many("Tag", "jobs", "Job")
            .unwrap();
        let ctx = ResolveContext::new(Arc::new(MemoryFetcher::new()));

        let installed = init(b, ctx.clone()).unwrap();
        assert_eq!(installed.len(), 2);

        let again = init(RegistryBuilder::new(), ctx);
        assert!(matches!(again, Err(CoreError::AlreadyInitialized)));

        let registry = global().unwrap();
        assert_eq!(registry.len(), 2);
        assert!(
            registry
                .resolve(&ResourceInstance::new("Tag", 5), "jobs")
                .is_ok()
        );
    }
}
