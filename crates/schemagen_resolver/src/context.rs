//! Per-run resolution context.

use crate::cache::TypeCache;
use crate::config::SchemaConfiguration;
use crate::error::Resolution;
use crate::resolvers::TypeResolver;
use schemagen_core::{ClassDescriptor, ClassId, ClassRegistry, UseSiteType};

/// Everything a resolver needs during one schema-generation run: the active
/// resolver chain, the configuration, the classes and the type cache.
///
/// Resolvers recurse through [`ResolveContext::resolver`], never through
/// each other, so the chain can be swapped without touching any resolver.
pub struct ResolveContext<'a> {
    resolver: &'a dyn TypeResolver,
    config: &'a dyn SchemaConfiguration,
    classes: &'a ClassRegistry,
    cache: TypeCache,
}

impl<'a> ResolveContext<'a> {
    /// Creates a context with an empty cache.
    pub fn new(
        resolver: &'a dyn TypeResolver,
        config: &'a dyn SchemaConfiguration,
        classes: &'a ClassRegistry,
    ) -> Self {
        Self {
            resolver,
            config,
            classes,
            cache: TypeCache::new(),
        }
    }

    /// The resolver recursive resolution goes through.
    #[must_use]
    pub fn resolver(&self) -> &'a dyn TypeResolver {
        self.resolver
    }

    #[must_use]
    pub fn config(&self) -> &'a dyn SchemaConfiguration {
        self.config
    }

    /// Gets a class by id.
    #[must_use]
    pub fn class(&self, id: ClassId) -> Option<&'a ClassDescriptor> {
        self.classes.get(id)
    }

    #[must_use]
    pub fn cache(&self) -> &TypeCache {
        &self.cache
    }

    /// Resolves a class through the active resolver.
    pub fn resolve_class(&self, id: ClassId) -> Resolution {
        match self.class(id) {
            Some(class) => self.resolver.resolve_class(class, self),
            None => Ok(None),
        }
    }

    /// Resolves a use-site type through the active resolver.
    pub fn resolve_type(&self, ty: &UseSiteType) -> Resolution {
        self.resolver.resolve_type(ty, self)
    }

    /// Resolves a member of a class, looked up by name, through the active resolver.
    pub fn resolve_member(&self, id: ClassId, member: &str) -> Resolution {
        let Some(class) = self.class(id) else {
            return Ok(None);
        };
        match class.member(member) {
            Some(member) => self.resolver.resolve_member(class, member, self),
            None => Ok(None),
        }
    }
}

impl std::fmt::Debug for ResolveContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveContext")
            .field("resolver", &self.resolver.name())
            .field("classes", &self.classes.len())
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
