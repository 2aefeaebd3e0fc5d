mod domain;
pub use domain::FOREIGN_KEY_SUFFIX;
pub use domain::{Attributes, Filter, ResourceId, TypeName, default_foreign_key, snake_case};

mod error;
pub use error::{ModelError, ModelResult};

mod resource;
pub use resource::{ResourceInstance, ResourceType};

mod relationship;
pub use relationship::{Cardinality, RelationshipDecl};

mod schema;
pub use schema::{RelationshipSchema, SchemaDoc, TypeSchema};
