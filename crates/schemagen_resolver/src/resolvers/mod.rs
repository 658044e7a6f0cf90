//! The resolver chain.
//!
//! Each resolver answers for the native types it recognizes and returns
//! `Ok(None)` for everything else. [`ComposedResolver`] tries a list of
//! resolvers in order and returns the first answer.

mod composed;
mod enums;
mod id;
mod list;
mod object;
mod optional;
mod scalar;

pub use composed::ComposedResolver;
pub use enums::EnumResolver;
pub use id::{matches_id_convention, IdResolver};
pub use list::ListLikeResolver;
pub use object::{is_plain_composite, InputObjectResolver, ObjectResolver};
pub use optional::OptionalResolver;
pub use scalar::{is_builtin_scalar, ScalarResolver};

use crate::context::ResolveContext;
use crate::error::Resolution;
use schemagen_core::{ClassDescriptor, MemberDescriptor, UseSiteType};

/// How narrowly a resolver matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specificity {
    /// Matches on member name as well as type. Consulted first for members.
    Member,
    /// Matches on type alone.
    Type,
}

/// Maps native types onto schema types.
///
/// The three entry points fall back onto each other: a member resolves
/// through its use-site type, and a use-site type through its class followed
/// by the nullability wrap. Resolvers override the ones they handle.
pub trait TypeResolver {
    /// A short name for logs and chain listings.
    fn name(&self) -> &'static str;

    fn specificity(&self) -> Specificity {
        Specificity::Type
    }

    /// Resolves a bare class.
    fn resolve_class(&self, _class: &ClassDescriptor, _ctx: &ResolveContext<'_>) -> Resolution {
        Ok(None)
    }

    /// Resolves a use-site type.
    fn resolve_type(&self, ty: &UseSiteType, ctx: &ResolveContext<'_>) -> Resolution {
        let Some(class) = ctx.class(ty.class) else {
            return Ok(None);
        };
        Ok(self
            .resolve_class(class, ctx)?
            .map(|node| node.wrap_non_null(ty.nullable)))
    }

    /// Resolves a member of `parent`.
    fn resolve_member(
        &self,
        _parent: &ClassDescriptor,
        member: &MemberDescriptor,
        ctx: &ResolveContext<'_>,
    ) -> Resolution {
        self.resolve_type(&member.ty, ctx)
    }
}
