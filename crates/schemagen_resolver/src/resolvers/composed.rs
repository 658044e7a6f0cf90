//! Chain-of-responsibility coordinator.

use super::{
    EnumResolver, IdResolver, InputObjectResolver, ListLikeResolver, ObjectResolver,
    OptionalResolver, ScalarResolver, Specificity, TypeResolver,
};
use crate::config::SchemaConfiguration;
use crate::context::ResolveContext;
use crate::error::Resolution;
use schemagen_core::{ClassDescriptor, MemberDescriptor, UseSiteType};

/// Tries an ordered list of resolvers and returns the first result.
///
/// Absence from every resolver is absence, not an error. Errors raised by a
/// resolver stop the search.
pub struct ComposedResolver {
    resolvers: Vec<Box<dyn TypeResolver>>,
}

impl Default for ComposedResolver {
    fn default() -> Self {
        Self::default_chain()
    }
}

impl ComposedResolver {
    /// Creates a chain from an ordered list of resolvers.
    #[must_use]
    pub fn new(resolvers: Vec<Box<dyn TypeResolver>>) -> Self {
        Self { resolvers }
    }

    /// The default chain: scalar, object, input object, id, enum, list-like,
    /// optional.
    #[must_use]
    pub fn default_chain() -> Self {
        Self::with_scalars(ScalarResolver::new())
    }

    /// The default chain with the configuration's extra scalars merged in.
    #[must_use]
    pub fn for_config(config: &dyn SchemaConfiguration) -> Self {
        Self::with_scalars(ScalarResolver::with_mappings(config.extra_scalars()))
    }

    fn with_scalars(scalars: ScalarResolver) -> Self {
        Self::new(vec![
            Box::new(scalars),
            Box::new(ObjectResolver),
            Box::new(InputObjectResolver),
            Box::new(IdResolver),
            Box::new(EnumResolver),
            Box::new(ListLikeResolver),
            Box::new(OptionalResolver),
        ])
    }

    /// Appends a resolver to the end of the chain.
    #[must_use]
    pub fn with(mut self, resolver: impl TypeResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Returns the resolvers in chain order.
    pub fn resolvers(&self) -> impl Iterator<Item = &dyn TypeResolver> {
        self.resolvers.iter().map(|resolver| resolver.as_ref() as &dyn TypeResolver)
    }

    /// Returns the resolver names in chain order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(|resolver| resolver.name()).collect()
    }

    /// Returns the number of resolvers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Returns true if the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

fn first_resolved<'r, I, F>(resolvers: I, mut resolve: F) -> Resolution
where
    I: Iterator<Item = &'r Box<dyn TypeResolver>>,
    F: FnMut(&dyn TypeResolver) -> Resolution,
{
    for resolver in resolvers {
        if let Some(node) = resolve(resolver.as_ref())? {
            return Ok(Some(node));
        }
    }
    Ok(None)
}

impl TypeResolver for ComposedResolver {
    fn name(&self) -> &'static str {
        "composed"
    }

    fn resolve_class(&self, class: &ClassDescriptor, ctx: &ResolveContext<'_>) -> Resolution {
        let resolved = first_resolved(self.resolvers.iter(), |r| r.resolve_class(class, ctx))?;
        if resolved.is_none() {
            tracing::trace!(class = class.qualified_name(), "no resolver accepts class");
        }
        Ok(resolved)
    }

    fn resolve_type(&self, ty: &UseSiteType, ctx: &ResolveContext<'_>) -> Resolution {
        first_resolved(self.resolvers.iter(), |r| r.resolve_type(ty, ctx))
    }

    fn resolve_member(
        &self,
        parent: &ClassDescriptor,
        member: &MemberDescriptor,
        ctx: &ResolveContext<'_>,
    ) -> Resolution {
        let by_specificity = |specificity| {
            self.resolvers
                .iter()
                .filter(move |r| r.specificity() == specificity)
        };
        first_resolved(
            by_specificity(Specificity::Member).chain(by_specificity(Specificity::Type)),
            |r| r.resolve_member(parent, member, ctx),
        )
    }
}
