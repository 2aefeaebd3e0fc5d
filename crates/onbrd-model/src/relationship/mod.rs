mod cardinality;
pub use cardinality::Cardinality;

mod declaration;
pub use declaration::RelationshipDecl;
