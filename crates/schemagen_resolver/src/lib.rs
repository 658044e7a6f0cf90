//! Type resolution engine for schemagen.
//!
//! Maps native type descriptors onto a GraphQL type graph:
//! - `schema`: Schema type nodes and definitions
//! - `cache`: Memoization of named types
//! - `context`: Per-run resolution context
//! - `resolvers`: The resolver chain
//! - `config`: Schema configuration
//! - `printer`: SDL printing
//! - `generator`: Whole-schema generation over a set of roots
//!
//! # Example
//!
//! ```ignore
//! use schemagen_resolver::{ComposedResolver, ResolveContext, SchemaConfig};
//!
//! let resolver = ComposedResolver::default_chain();
//! let config = SchemaConfig::default();
//! let ctx = ResolveContext::new(&resolver, &config, &registry);
//! let node = ctx.resolve_class(user_id)?;
//! ```

pub mod cache;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod printer;
pub mod resolvers;
pub mod schema;

pub use cache::{CacheEntry, TypeCache};
pub use config::{ScalarMapping, SchemaConfig, SchemaConfiguration};
pub use context::ResolveContext;
pub use error::{Direction, FieldPath, Resolution, ResolveError};
pub use generator::{GeneratedSchema, RootError, SchemaGenerator};
pub use printer::{print_definition, print_schema, PrintOptions, SchemaPrinter};
pub use resolvers::{
    ComposedResolver, EnumResolver, IdResolver, InputObjectResolver, ListLikeResolver,
    ObjectResolver, OptionalResolver, ScalarResolver, Specificity, TypeResolver,
};
pub use schema::{
    CompositeDef, EnumDef, EnumValueDef, FieldDef, NamedKind, NamedType, SchemaType,
    TypeDefinition,
};
