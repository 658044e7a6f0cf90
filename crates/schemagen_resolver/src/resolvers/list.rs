//! List resolution.

use super::TypeResolver;
use crate::context::ResolveContext;
use crate::error::Resolution;
use crate::schema::SchemaType;
use schemagen_core::UseSiteType;

/// Resolves sequences and arrays onto list types.
///
/// A wildcard or missing element type, or an element type nothing in the
/// chain resolves, leaves the whole list unresolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListLikeResolver;

impl TypeResolver for ListLikeResolver {
    fn name(&self) -> &'static str {
        "list_like"
    }

    fn resolve_type(&self, ty: &UseSiteType, ctx: &ResolveContext<'_>) -> Resolution {
        if !ctx.class(ty.class).is_some_and(|class| class.kind().is_list_like()) {
            return Ok(None);
        }
        let Some(element) = ty.first_argument().and_then(|arg| arg.as_type()) else {
            return Ok(None);
        };

        Ok(ctx
            .resolve_type(element)?
            .map(|inner| SchemaType::list(inner).wrap_non_null(ty.nullable)))
    }
}
