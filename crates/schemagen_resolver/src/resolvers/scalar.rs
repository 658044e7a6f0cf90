//! Scalar resolution.

use super::TypeResolver;
use crate::config::ScalarMapping;
use crate::context::ResolveContext;
use crate::error::Resolution;
use crate::schema::SchemaType;
use indexmap::IndexMap;
use schemagen_core::UseSiteType;

/// Native value types and the scalars they map onto.
const DEFAULT_SCALARS: &[(&str, &str)] = &[
    ("String", "String"),
    ("str", "String"),
    ("bool", "Boolean"),
    ("i32", "Int"),
    ("f32", "Float"),
    ("f64", "Float"),
    ("i64", "Long"),
    ("i128", "BigInteger"),
    ("Decimal", "BigDecimal"),
    ("i8", "Byte"),
    ("char", "Char"),
    ("i16", "Short"),
    ("u8", "Short"),
    ("u16", "Int"),
    ("u32", "Long"),
    ("u64", "BigInteger"),
];

/// Returns true if `native` is in the default scalar table.
#[must_use]
pub fn is_builtin_scalar(native: &str) -> bool {
    DEFAULT_SCALARS.iter().any(|(name, _)| *name == native)
}

/// Maps well-known native value types onto named scalars.
///
/// Only use-site types are resolved; a bare class never is.
#[derive(Debug, Clone)]
pub struct ScalarResolver {
    mappings: IndexMap<String, String>,
}

impl Default for ScalarResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarResolver {
    /// Creates a resolver over the default table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mappings: DEFAULT_SCALARS
                .iter()
                .map(|(native, scalar)| ((*native).to_string(), (*scalar).to_string()))
                .collect(),
        }
    }

    /// Creates a resolver over the default table with `extra` merged in.
    /// Extra mappings override default ones of the same native name.
    #[must_use]
    pub fn with_mappings(extra: impl IntoIterator<Item = ScalarMapping>) -> Self {
        let mut resolver = Self::new();
        for mapping in extra {
            resolver.mappings.insert(mapping.native, mapping.scalar);
        }
        resolver
    }

    /// Returns the scalar name for a native type.
    #[must_use]
    pub fn scalar_for(&self, native: &str) -> Option<&str> {
        self.mappings.get(native).map(String::as_str)
    }
}

impl TypeResolver for ScalarResolver {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn resolve_type(&self, ty: &UseSiteType, ctx: &ResolveContext<'_>) -> Resolution {
        let Some(class) = ctx.class(ty.class) else {
            return Ok(None);
        };
        let scalar = class
            .name()
            .and_then(|name| self.scalar_for(name))
            .or_else(|| self.scalar_for(class.qualified_name()));
        Ok(scalar.map(|name| SchemaType::scalar(name).wrap_non_null(ty.nullable)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolvers::test_util::{chain, record, ty, with_context};
    use schemagen_core::ClassRegistry;

    #[test]
    fn test_table() {
        let resolver = ScalarResolver::new();
        assert_eq!(resolver.scalar_for("String"), Some("String"));
        assert_eq!(resolver.scalar_for("i64"), Some("Long"));
        assert_eq!(resolver.scalar_for("f64"), Some("Float"));
        assert_eq!(resolver.scalar_for("u32"), Some("Long"));
        assert_eq!(resolver.scalar_for("Uuid"), None);
        assert!(is_builtin_scalar("Decimal"));
        assert!(!is_builtin_scalar("Vec"));
    }

    #[test]
    fn test_nullability() {
        let registry = ClassRegistry::new();
        let resolver = chain(vec![Box::new(ScalarResolver::new())]);

        with_context(&registry, &resolver, |ctx| {
            let required = ctx.resolve_type(&ty(&registry, "String")).unwrap().unwrap();
            let optional = ctx.resolve_type(&ty(&registry, "i32?")).unwrap().unwrap();
            insta::assert_snapshot!(required.to_string(), @"String!");
            insta::assert_snapshot!(optional.to_string(), @"Int");
        });
    }

    #[test]
    fn test_every_numeric_primitive_has_a_scalar() {
        for native in ["i8", "i16", "i32", "i64", "i128", "u8", "u16", "u32", "u64", "f32", "f64"] {
            assert!(is_builtin_scalar(native), "{native}");
        }
    }

    #[test]
    fn test_never_resolves_classes() {
        let mut registry = ClassRegistry::new();
        let test = record(&mut registry, "Test", &[]);
        let string = registry.lookup("String").unwrap();
        let resolver = chain(vec![Box::new(ScalarResolver::new())]);

        with_context(&registry, &resolver, |ctx| {
            assert_eq!(ctx.resolve_class(string), Ok(None));
            assert_eq!(ctx.resolve_class(test), Ok(None));
            assert_eq!(ctx.resolve_type(&ty(&registry, "Test")), Ok(None));
            assert_eq!(ctx.resolve_type(&ty(&registry, "Uuid")), Ok(None));
        });
    }

    #[test]
    fn test_extra_mappings_override() {
        let resolver = ScalarResolver::with_mappings([
            ScalarMapping::new("Uuid", "String"),
            ScalarMapping::new("i64", "Int"),
        ]);
        assert_eq!(resolver.scalar_for("Uuid"), Some("String"));
        assert_eq!(resolver.scalar_for("i64"), Some("Int"));
        assert_eq!(resolver.scalar_for("bool"), Some("Boolean"));
    }
}
