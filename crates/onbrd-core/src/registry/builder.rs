use std::collections::HashMap;

use tracing::{debug, trace, warn};

use onbrd_model::{Cardinality, RelationshipDecl, ResourceType, SchemaDoc, TypeName};

use crate::{
    error::CoreError,
    registry::{RelationshipRegistry, ResolveContext},
};

/// Mutable registration phase of the relationship registry.
///
/// Types and declarations can be added in any order: a declaration may name a target
/// that is registered later (or never, in which case resolving it fails).
/// [`RegistryBuilder::build`] freezes the result.
#[derive(Debug, Default, Clone)]
pub struct RegistryBuilder {
    pub(crate) types: HashMap<TypeName, ResourceType>,
    pub(crate) relationships: HashMap<TypeName, Vec<RelationshipDecl>>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource type.
    ///
    /// Fails with [`CoreError::DuplicateResourceType`] if the name is taken.
    pub fn register_type(&mut self, ty: ResourceType) -> Result<&mut Self, CoreError> {
        ty.validate()?;
        if self.types.contains_key(ty.name()) {
            return Err(CoreError::DuplicateResourceType(ty.name().to_string()));
        }

        trace!(name = ty.name(), endpoint = ty.endpoint(), "resource type registered");
        self.types.insert(ty.name().to_string(), ty);
        Ok(self)
    }

    /// Declare a relationship from its parts.
    ///
    /// `cardinality` accepts a [`Cardinality`] or its textual form (`"many"`, `"has_many"`, ...);
    /// unrecognized text fails with [`CoreError::InvalidCardinality`].
    /// `foreign_key` overrides the conventional key when set.
    pub fn declare_relationship<C>(
        &mut self,
        owner: &str,
        name: &str,
        cardinality: C,
        target: &str,
        foreign_key: Option<&str>,
    ) -> Result<&mut Self, CoreError>
    where
        C: TryInto<Cardinality>,
        CoreError: From<C::Error>,
    {
        let cardinality = cardinality.try_into()?;
        let decl = RelationshipDecl::new(owner, name, cardinality, target);
        let decl = match foreign_key {
            Some(fk) => decl.with_foreign_key(fk),
            None => decl,
        };
        self.declare(decl)
    }

    /// `owner has_many name -> target` with the conventional foreign key.
    pub fn declare_has_many(
        &mut self,
        owner: &str,
        name: &str,
        target: &str,
    ) -> Result<&mut Self, CoreError> {
        self.declare(RelationshipDecl::has_many(owner, name, target))
    }

    /// `owner has_one name -> target` with the conventional foreign key.
    pub fn declare_has_one(
        &mut self,
        owner: &str,
        name: &str,
        target: &str,
    ) -> Result<&mut Self, CoreError> {
        self.declare(RelationshipDecl::has_one(owner, name, target))
    }

    /// Register a prepared declaration.
    ///
    /// Fails with [`CoreError::DuplicateRelationship`] if the owner already declares this name,
    /// whatever the cardinality or target of either declaration.
    pub fn declare(&mut self, decl: RelationshipDecl) -> Result<&mut Self, CoreError> {
        decl.validate()?;

        let owned = self.relationships.entry(decl.owner.clone()).or_default();
        if owned.iter().any(|d| d.name == decl.name) {
            return Err(CoreError::DuplicateRelationship {
                owner: decl.owner,
                name: decl.name,
            });
        }

        debug!(
            owner = %decl.owner,
            name = %decl.name,
            cardinality = %decl.cardinality,
            target_type = %decl.target,
            fk = %decl.foreign_key(),
            "relationship declared"
        );
        owned.push(decl);
        Ok(self)
    }

    /// Apply a schema document: every type first, then every relationship.
    ///
    /// Stops at the first failing entry; entries applied before it stay registered.
    pub fn apply_schema(&mut self, doc: &SchemaDoc) -> Result<&mut Self, CoreError> {
        for ty in &doc.types {
            self.register_type(ty.resource_type())?;
        }
        for ty in &doc.types {
            for decl in ty.declarations()? {
                self.declare(decl)?;
            }
        }
        Ok(self)
    }

    /// Freeze the builder into an immutable registry bound to `ctx`.
    ///
    /// Declarations whose target is still missing are kept and logged; resolving them
    /// fails until the registry is rebuilt with the target present.
    pub fn build(self, ctx: ResolveContext) -> RelationshipRegistry {
        let registry = RelationshipRegistry::from_parts(self.types, self.relationships, ctx);
        for d in registry.validate() {
            warn!(owner = %d.owner, name = %d.name, target_type = %d.target, "relationship targets an unregistered type");
        }
        debug!(
            types = registry.len(),
            relationships = registry.relationship_count(),
            "relationship registry frozen"
        );
        registry
    }
}
