mod id;
pub use id::ResourceId;

mod attributes;
pub use attributes::Attributes;

mod filter;
pub use filter::Filter;

mod naming;
pub use naming::{FOREIGN_KEY_SUFFIX, default_foreign_key, snake_case};

/// Name of a resource type as registered in the relationship registry (e.g. `"Tag"`).
///
/// Type names are compared verbatim; no case folding is applied.
pub type TypeName = String;
