//! Object and input object resolution.

use super::{is_builtin_scalar, TypeResolver};
use crate::context::ResolveContext;
use crate::error::{class_name, Direction, FieldPath, Resolution, ResolveError};
use crate::schema::{CompositeDef, NamedKind, NamedType, SchemaType, TypeDefinition};
use schemagen_core::{ClassDescriptor, ClassKind};

/// Returns true if a class maps onto an object or input object: a record,
/// or a concrete class that is not a scalar-backing type.
#[must_use]
pub fn is_plain_composite(class: &ClassDescriptor) -> bool {
    match class.kind() {
        ClassKind::Record => true,
        ClassKind::Class => !class.name().is_some_and(is_builtin_scalar),
        ClassKind::Abstract
        | ClassKind::Interface
        | ClassKind::Enum
        | ClassKind::Primitive
        | ClassKind::Sequence
        | ClassKind::Array
        | ClassKind::Optional => false,
    }
}

/// Resolves plain composites onto cached object types.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectResolver;

impl TypeResolver for ObjectResolver {
    fn name(&self) -> &'static str {
        "object"
    }

    fn resolve_class(&self, class: &ClassDescriptor, ctx: &ResolveContext<'_>) -> Resolution {
        if !is_plain_composite(class) || ctx.config().is_input_type(class) {
            return Ok(None);
        }
        resolve_composite(class, ctx, Direction::Output).map(Some)
    }
}

/// Resolves classes the configuration marks as input types onto cached
/// input object types.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputObjectResolver;

impl TypeResolver for InputObjectResolver {
    fn name(&self) -> &'static str {
        "input_object"
    }

    fn resolve_class(&self, class: &ClassDescriptor, ctx: &ResolveContext<'_>) -> Resolution {
        if !ctx.config().is_input_type(class) {
            return Ok(None);
        }
        resolve_composite(class, ctx, Direction::Input).map(Some)
    }
}

fn resolve_composite(
    class: &ClassDescriptor,
    ctx: &ResolveContext<'_>,
    direction: Direction,
) -> Result<SchemaType, ResolveError> {
    let name = class_name(class)?;
    let kind = match direction {
        Direction::Output => NamedKind::Object,
        Direction::Input => NamedKind::InputObject,
    };

    ctx.cache().get_or_compute(NamedType::new(kind, name), || {
        let def = build_fields(class, name, ctx, direction)?;
        tracing::trace!(name, fields = def.fields.len(), %direction, "built composite");
        Ok(match direction {
            Direction::Output => TypeDefinition::Object(def),
            Direction::Input => TypeDefinition::InputObject(def),
        })
    })
}

fn build_fields(
    class: &ClassDescriptor,
    name: &str,
    ctx: &ResolveContext<'_>,
    direction: Direction,
) -> Result<CompositeDef, ResolveError> {
    let mut def = CompositeDef::new(name);

    for member in class.members() {
        let path = || FieldPath::new(name, &member.name);

        let Some(resolved) = ctx.resolver().resolve_member(class, member, ctx)? else {
            return Err(ResolveError::Unresolvable { path: path() });
        };

        // an optional box has already made the field nullable
        let boxed = ctx
            .class(member.ty.class)
            .is_some_and(|target| target.kind() == ClassKind::Optional);
        let ty = if boxed {
            resolved
        } else {
            resolved.wrap_non_null(member.ty.nullable)
        };

        if !ty.supports(direction) {
            return Err(ResolveError::DirectionMismatch {
                path: path(),
                expected: direction,
                found: direction.opposite(),
            });
        }

        def.add_field(&member.name, ty);
    }

    Ok(def)
}
