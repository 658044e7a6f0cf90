//! Whole-schema generation.

use crate::config::SchemaConfiguration;
use crate::context::ResolveContext;
use crate::error::ResolveError;
use crate::printer::print_schema;
use crate::resolvers::ComposedResolver;
use crate::schema::TypeDefinition;
use schemagen_core::{ClassId, ClassRegistry};
use std::rc::Rc;
use thiserror::Error;

/// A root class whose generation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to generate `{name}`")]
pub struct RootError {
    pub class: ClassId,
    /// Qualified name of the root.
    pub name: String,
    #[source]
    pub error: ResolveError,
}

/// The result of one generation run.
#[derive(Debug, Default)]
pub struct GeneratedSchema {
    /// Every definition built during the run, in first-resolution order.
    pub definitions: Vec<Rc<TypeDefinition>>,
    /// Roots that resolved.
    pub resolved: Vec<ClassId>,
    /// Roots no resolver accepted.
    pub skipped: Vec<ClassId>,
    pub errors: Vec<RootError>,
}

impl GeneratedSchema {
    /// Returns true if no root failed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Gets a definition by name.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.definitions
            .iter()
            .map(|def| &**def)
            .find(|def| def.name() == name)
    }

    /// Prints the definitions as SDL.
    #[must_use]
    pub fn to_sdl(&self) -> String {
        print_schema(self.definitions.iter().map(|def| &**def))
    }
}

/// Resolves a set of root classes into one schema.
///
/// All roots share one context, so a type reachable from several roots is
/// built once. A failing root is recorded and the remaining roots still run.
pub struct SchemaGenerator<'a> {
    classes: &'a ClassRegistry,
    config: &'a dyn SchemaConfiguration,
    resolver: ComposedResolver,
}

impl<'a> SchemaGenerator<'a> {
    /// Creates a generator over the default chain for `config`.
    pub fn new(classes: &'a ClassRegistry, config: &'a dyn SchemaConfiguration) -> Self {
        Self {
            classes,
            config,
            resolver: ComposedResolver::for_config(config),
        }
    }

    /// Replaces the resolver chain.
    #[must_use]
    pub fn with_resolver(mut self, resolver: ComposedResolver) -> Self {
        self.resolver = resolver;
        self
    }

    #[must_use]
    pub fn resolver(&self) -> &ComposedResolver {
        &self.resolver
    }

    /// Generates the schema for `roots`.
    pub fn generate(&self, roots: &[ClassId]) -> GeneratedSchema {
        let ctx = ResolveContext::new(&self.resolver, self.config, self.classes);
        let mut schema = GeneratedSchema::default();

        for &root in roots {
            let name = ctx
                .class(root)
                .map(|class| class.qualified_name().to_string())
                .unwrap_or_default();

            match ctx.resolve_class(root) {
                Ok(Some(node)) => {
                    tracing::debug!(root = %name, %node, "resolved root");
                    schema.resolved.push(root);
                }
                Ok(None) => {
                    tracing::debug!(root = %name, "no resolver accepts root");
                    schema.skipped.push(root);
                }
                Err(error) => {
                    tracing::warn!(root = %name, %error, "failed to resolve root");
                    schema.errors.push(RootError {
                        class: root,
                        name,
                        error,
                    });
                }
            }
        }

        schema.definitions = ctx.cache().definitions();
        tracing::debug!(
            definitions = schema.definitions.len(),
            errors = schema.errors.len(),
            "generated schema"
        );
        schema
    }
}
