//! Optional box resolution.

use super::TypeResolver;
use crate::context::ResolveContext;
use crate::error::Resolution;
use schemagen_core::{ClassKind, UseSiteType};

/// Resolves an optional box to its content, made nullable.
///
/// Only the outermost box is consulted: the content resolves under its own
/// rules and just loses its outer non-null layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalResolver;

impl TypeResolver for OptionalResolver {
    fn name(&self) -> &'static str {
        "optional"
    }

    fn resolve_type(&self, ty: &UseSiteType, ctx: &ResolveContext<'_>) -> Resolution {
        if !ctx
            .class(ty.class)
            .is_some_and(|class| class.kind() == ClassKind::Optional)
        {
            return Ok(None);
        }
        let Some(inner) = ty.first_argument().and_then(|arg| arg.as_type()) else {
            return Ok(None);
        };

        Ok(ctx.resolve_type(inner)?.map(|node| node.strip_non_null()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolvers::test_util::{chain, record, ty, with_context};
    use crate::resolvers::{ComposedResolver, ListLikeResolver, ScalarResolver};
    use schemagen_core::ClassRegistry;

    fn resolve(expr: &str) -> Option<String> {
        let registry = ClassRegistry::new();
        let resolver = chain(vec![
            Box::new(ScalarResolver::new()),
            Box::new(ListLikeResolver),
            Box::new(OptionalResolver),
        ]);
        with_context(&registry, &resolver, |ctx| {
            ctx.resolve_type(&ty(&registry, expr))
                .unwrap()
                .map(|node| node.to_string())
        })
    }

    #[test]
    fn test_scalar() {
        assert_eq!(resolve("Optional<String>").as_deref(), Some("String"));
        assert_eq!(resolve("Optional<String?>").as_deref(), Some("String"));
        assert_eq!(resolve("Optional<String>?").as_deref(), Some("String"));
    }

    #[test]
    fn test_optional_list_of_required() {
        insta::assert_snapshot!(
            resolve("Optional<Vec<Vec<Vec<String>>>>").unwrap(),
            @"[[[String!]!]!]"
        );
    }

    #[test]
    fn test_optional_list_of_nullable() {
        insta::assert_snapshot!(
            resolve("Optional<Vec<Vec<Vec<String?>?>?>?>").unwrap(),
            @"[[[String]]]"
        );
    }

    #[test]
    fn test_only_outermost_box_counts() {
        insta::assert_snapshot!(
            resolve("Optional<Vec<Vec<Vec<String>?>>>").unwrap(),
            @"[[[String!]]!]"
        );
        assert_eq!(
            resolve("Optional<Vec<Optional<i32>>>").as_deref(),
            Some("[Int]")
        );
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(resolve("Optional"), None);
        assert_eq!(resolve("Optional<*>"), None);
        assert_eq!(resolve("Optional<Uuid>"), None);
    }

    #[test]
    fn test_optional_field_stays_nullable() {
        let mut registry = ClassRegistry::new();
        let test = record(&mut registry, "Test", &[("x", "Optional<Vec<String>>")]);
        let resolver = ComposedResolver::default_chain();

        with_context(&registry, &resolver, |ctx| {
            ctx.resolve_class(test).unwrap();
            let def = ctx.cache().definition("Test").unwrap();
            assert_eq!(def.fields().unwrap()["x"].ty.to_string(), "[String!]");
        });
    }
}
