//! Relationship registry: resource types, their named relationships, and resolution
//! of those relationships into lazy accessors.
//!
//! The registry has two phases:
//! - registration on a mutable [`RegistryBuilder`];
//! - resolution on the frozen [`RelationshipRegistry`], which exposes no mutation and can be
//!   shared across threads without locking.
mod builder;
pub use builder::RegistryBuilder;

mod context;
pub use context::ResolveContext;

mod global;
pub use global::{global, init};

use std::{collections::HashMap, fmt, sync::Arc};

use tracing::{debug, instrument};

use onbrd_model::{
    Cardinality, Filter, RelationshipDecl, ResourceInstance, ResourceType, TypeName,
};

use crate::{
    error::CoreError,
    metrics::{ResolveOutcome, UNKNOWN_LABEL},
    relation::{ManyRelation, OneRelation, Relation},
};

/// Declaration whose target type is not registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingRelationship {
    pub owner: TypeName,
    pub name: String,
    pub target: TypeName,
}

/// Frozen relationship registry.
pub struct RelationshipRegistry {
    types: HashMap<TypeName, ResourceType>,
    relationships: HashMap<TypeName, Vec<RelationshipDecl>>,
    ctx: ResolveContext,
}

impl RelationshipRegistry {
    pub(crate) fn from_parts(
        types: HashMap<TypeName, ResourceType>,
        relationships: HashMap<TypeName, Vec<RelationshipDecl>>,
        ctx: ResolveContext,
    ) -> Self {
        Self {
            types,
            relationships,
            ctx,
        }
    }

    /// Resolve relationship `name` on `instance` into a lazy accessor.
    ///
    /// - `many`: accessor over target records with `foreign_key == instance.id`;
    /// - `one`: accessor over the target record whose id is stored in the owner's foreign key.
    ///
    /// Validation happens here, synchronously; no fetch is issued until the accessor is awaited.
    #[instrument(level = "debug", skip(self, instance), fields(owner = %instance.type_name, id = %instance.id))]
    pub fn resolve(&self, instance: &ResourceInstance, name: &str) -> Result<Relation, CoreError> {
        let res = self.resolve_inner(instance, name);

        // Labels only ever carry registered names.
        let outcome = match &res {
            Ok(_) => Some((name, ResolveOutcome::Resolved)),
            Err(CoreError::UnknownRelationship { .. }) => {
                Some((UNKNOWN_LABEL, ResolveOutcome::UnknownRelationship))
            }
            Err(CoreError::UnknownTargetType { .. }) => {
                Some((name, ResolveOutcome::UnknownTargetType))
            }
            Err(CoreError::InvalidForeignKey { .. }) => {
                Some((name, ResolveOutcome::InvalidForeignKey))
            }
            Err(_) => None,
        };
        if let Some((relationship, outcome)) = outcome {
            let owner = if self.types.contains_key(&instance.type_name) {
                instance.type_name.as_str()
            } else {
                UNKNOWN_LABEL
            };
            self.ctx
                .metrics()
                .record_resolve(owner, relationship, outcome);
        }

        match &res {
            Ok(rel) => debug!(cardinality = %rel.cardinality(), target_type = rel.target().name(), "relationship resolved"),
            Err(e) => debug!(error = %e, "relationship resolution failed"),
        }
        res
    }

    fn resolve_inner(
        &self,
        instance: &ResourceInstance,
        name: &str,
    ) -> Result<Relation, CoreError> {
        let decl = self.relationship(&instance.type_name, name).ok_or_else(|| {
            CoreError::UnknownRelationship {
                owner: instance.type_name.clone(),
                name: name.to_string(),
            }
        })?;

        let target = self
            .types
            .get(&decl.target)
            .ok_or_else(|| CoreError::UnknownTargetType {
                owner: decl.owner.clone(),
                name: decl.name.clone(),
                target: decl.target.clone(),
            })?;

        let fetcher = Arc::clone(self.ctx.fetcher());
        let metrics = Arc::clone(self.ctx.metrics());
        let fk = decl.foreign_key();

        match decl.cardinality {
            Cardinality::Many => {
                let filter = Filter::new(fk, instance.id.clone());
                Ok(Relation::Many(ManyRelation::new(
                    fetcher,
                    metrics,
                    target.clone(),
                    filter,
                )))
            }
            Cardinality::One => {
                let id = instance
                    .reference(&fk)
                    .map_err(|_| CoreError::InvalidForeignKey {
                        owner: decl.owner.clone(),
                        name: decl.name.clone(),
                        value: instance
                            .attr(&fk)
                            .map(|v| v.to_string())
                            .unwrap_or_default(),
                        field: fk.clone(),
                    })?;
                Ok(Relation::One(OneRelation::new(
                    fetcher,
                    metrics,
                    target.clone(),
                    fk,
                    id,
                )))
            }
        }
    }

    /// Look up a registered resource type.
    pub fn resource_type(&self, name: &str) -> Option<&ResourceType> {
        self.types.get(name)
    }

    /// Endpoint of a single instance, e.g. `/tags/ruby`.
    pub fn member_path(&self, instance: &ResourceInstance) -> Result<String, CoreError> {
        self.types
            .get(&instance.type_name)
            .map(|ty| ty.member_path(&instance.id))
            .ok_or_else(|| CoreError::UnknownResourceType(instance.type_name.clone()))
    }

    /// Look up a declaration by owner and name.
    pub fn relationship(&self, owner: &str, name: &str) -> Option<&RelationshipDecl> {
        self.relationships
            .get(owner)
            .and_then(|decls| decls.iter().find(|d| d.name == name))
    }

    /// Declarations owned by `owner`, in declaration order.
    pub fn relationships_of(&self, owner: &str) -> &[RelationshipDecl] {
        self.relationships
            .get(owner)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered resource types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no resource type is registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Total number of declarations across all owners.
    pub fn relationship_count(&self) -> usize {
        self.relationships.values().map(Vec::len).sum()
    }

    /// Declarations whose target type is missing, sorted by owner then name.
    pub fn validate(&self) -> Vec<DanglingRelationship> {
        let mut out: Vec<DanglingRelationship> = self
            .relationships
            .values()
            .flatten()
            .filter(|d| !self.types.contains_key(&d.target))
            .map(|d| DanglingRelationship {
                owner: d.owner.clone(),
                name: d.name.clone(),
                target: d.target.clone(),
            })
            .collect();
        out.sort_by(|a, b| (&a.owner, &a.name).cmp(&(&b.owner, &b.name)));
        out
    }

    /// Context shared with accessors.
    pub fn context(&self) -> &ResolveContext {
        &self.ctx
    }
}

impl fmt::Debug for RelationshipRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationshipRegistry")
            .field("types", &self.type_names())
            .field("relationships", &self.relationship_count())
            .finish()
    }
}
