mod kind;
pub use kind::ResourceType;

mod instance;
pub use instance::ResourceInstance;
