//! Enum resolution.

use super::TypeResolver;
use crate::context::ResolveContext;
use crate::error::{class_name, Resolution};
use crate::schema::{EnumDef, EnumValueDef, NamedKind, NamedType, TypeDefinition};
use schemagen_core::ClassDescriptor;

/// Resolves enumerations onto cached enum types.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumResolver;

impl TypeResolver for EnumResolver {
    fn name(&self) -> &'static str {
        "enum"
    }

    fn resolve_class(&self, class: &ClassDescriptor, ctx: &ResolveContext<'_>) -> Resolution {
        if !class.is_enum() {
            return Ok(None);
        }

        let name = class_name(class)?;
        let node = ctx
            .cache()
            .get_or_compute(NamedType::new(NamedKind::Enum, name), || {
                let values = class
                    .constants()
                    .iter()
                    .zip(0u32..)
                    .map(|(constant, ordinal)| EnumValueDef {
                        name: constant.clone(),
                        ordinal,
                    })
                    .collect();
                Ok(TypeDefinition::Enum(EnumDef {
                    name: name.to_string(),
                    values,
                }))
            })?;
        Ok(Some(node))
    }
}
