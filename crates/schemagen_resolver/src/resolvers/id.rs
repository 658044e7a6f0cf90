//! ID-by-convention resolution.

use super::{Specificity, TypeResolver};
use crate::context::ResolveContext;
use crate::error::Resolution;
use crate::schema::SchemaType;
use schemagen_core::{ClassDescriptor, MemberDescriptor};

/// Native value types that may back an ID.
const ID_TYPES: &[&str] = &["i32", "i64", "String", "str", "Uuid"];

/// Returns true if a member name follows the ID convention: it ends in `id`,
/// ignoring case.
#[must_use]
pub fn matches_id_convention(member: &str) -> bool {
    member.to_ascii_lowercase().ends_with("id")
}

/// Resolves members named like IDs onto the ID scalar.
///
/// Only members are resolved, and the cache is never consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdResolver;

impl TypeResolver for IdResolver {
    fn name(&self) -> &'static str {
        "id"
    }

    fn specificity(&self) -> Specificity {
        Specificity::Member
    }

    fn resolve_member(
        &self,
        _parent: &ClassDescriptor,
        member: &MemberDescriptor,
        ctx: &ResolveContext<'_>,
    ) -> Resolution {
        if !matches_id_convention(&member.name) {
            return Ok(None);
        }
        let supported = ctx
            .class(member.ty.class)
            .and_then(ClassDescriptor::name)
            .is_some_and(|name| ID_TYPES.iter().any(|id| *id == name));
        if !supported {
            return Ok(None);
        }

        Ok(Some(SchemaType::id().wrap_non_null(member.ty.nullable)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolvers::test_util::{chain, record, ty, with_context};
    use schemagen_core::ClassRegistry;

    fn id_only() -> crate::resolvers::ComposedResolver {
        chain(vec![Box::new(IdResolver)])
    }

    #[test]
    fn test_convention() {
        for name in ["id", "iD", "Id", "ID", "theid", "theId", "userID"] {
            assert!(matches_id_convention(name), "{name}");
        }
        for name in ["ids", "theIds", "identity", "i"] {
            assert!(!matches_id_convention(name), "{name}");
        }
    }

    #[test]
    fn test_supported_types() {
        let mut registry = ClassRegistry::new();
        let test = record(
            &mut registry,
            "Test",
            &[
                ("a_id", "i32"),
                ("b_id", "i64"),
                ("c_id", "String"),
                ("d_id", "Uuid"),
                ("e_id", "i64?"),
                ("f_id", "f32"),
                ("g_id", "Vec<i64>"),
            ],
        );
        let resolver = id_only();

        with_context(&registry, &resolver, |ctx| {
            for member in ["a_id", "b_id", "c_id", "d_id"] {
                assert_eq!(
                    ctx.resolve_member(test, member),
                    Ok(Some(SchemaType::non_null(SchemaType::id()))),
                    "{member}"
                );
            }
            assert_eq!(ctx.resolve_member(test, "e_id"), Ok(Some(SchemaType::id())));
            assert_eq!(ctx.resolve_member(test, "f_id"), Ok(None));
            assert_eq!(ctx.resolve_member(test, "g_id"), Ok(None));
        });
    }

    #[test]
    fn test_name_variants() {
        let mut registry = ClassRegistry::new();
        let test = record(
            &mut registry,
            "Test",
            &[
                ("id", "i64"),
                ("iD", "i64"),
                ("Id", "i64"),
                ("ID", "i64"),
                ("theid", "i64"),
                ("theId", "i64"),
                ("ids", "i64"),
                ("theIds", "i64"),
            ],
        );
        let resolver = id_only();

        with_context(&registry, &resolver, |ctx| {
            for member in ["id", "iD", "Id", "ID", "theid", "theId"] {
                assert_eq!(
                    ctx.resolve_member(test, member).unwrap().unwrap().to_string(),
                    "ID!",
                    "{member}"
                );
            }
            assert_eq!(ctx.resolve_member(test, "ids"), Ok(None));
            assert_eq!(ctx.resolve_member(test, "theIds"), Ok(None));
        });
    }

    #[test]
    fn test_member_only() {
        let mut registry = ClassRegistry::new();
        let test = record(&mut registry, "Test", &[("id", "i64")]);
        let resolver = id_only();

        with_context(&registry, &resolver, |ctx| {
            assert_eq!(ctx.resolve_class(test), Ok(None));
            assert_eq!(ctx.resolve_type(&ty(&registry, "i64")), Ok(None));
            ctx.resolve_member(test, "id").unwrap();
            assert!(ctx.cache().is_empty());
        });
    }
}
