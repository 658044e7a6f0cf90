//! Static reflection over native Rust types.
//!
//! `Describe` is implemented by hand for the std types below and derived for
//! user types with `#[derive(Describe)]` from `schemagen_macros`.

use crate::registry::{builtins, ClassRegistry};
use crate::use_site::UseSiteType;
use std::collections::VecDeque;

/// A native type that can describe its use-site type.
pub trait Describe {
    /// Registers the classes this type needs and returns its use-site type.
    fn describe(registry: &mut ClassRegistry) -> UseSiteType;
}

macro_rules! describe_primitive {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe(registry: &mut ClassRegistry) -> UseSiteType {
                    UseSiteType::new(registry.primitive($name))
                }
            }
        )*
    };
}

describe_primitive! {
    String => "String",
    str => "str",
    bool => "bool",
    char => "char",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    f32 => "f32",
    f64 => "f64",
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(registry: &mut ClassRegistry) -> UseSiteType {
        T::describe(registry)
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe(registry: &mut ClassRegistry) -> UseSiteType {
        T::describe(registry)
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe(registry: &mut ClassRegistry) -> UseSiteType {
        T::describe(registry).nullable()
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe(registry: &mut ClassRegistry) -> UseSiteType {
        let element = T::describe(registry);
        UseSiteType::new(registry.primitive(builtins::VEC)).with_argument(element)
    }
}

impl<T: Describe> Describe for VecDeque<T> {
    fn describe(registry: &mut ClassRegistry) -> UseSiteType {
        let element = T::describe(registry);
        UseSiteType::new(registry.primitive(builtins::VEC_DEQUE)).with_argument(element)
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe(registry: &mut ClassRegistry) -> UseSiteType {
        let element = T::describe(registry);
        UseSiteType::new(registry.primitive(builtins::ARRAY)).with_argument(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::ClassKind;
    use crate::use_site::TypeArgument;

    fn kind_of(registry: &ClassRegistry, ty: &UseSiteType) -> ClassKind {
        registry.get(ty.class).unwrap().kind()
    }

    #[test]
    fn test_primitive() {
        let mut registry = ClassRegistry::new();
        let ty = i64::describe(&mut registry);
        assert_eq!(ty.class, registry.lookup("i64").unwrap());
        assert!(!ty.nullable);
    }

    #[test]
    fn test_option_marks_nullable() {
        let mut registry = ClassRegistry::new();
        let ty = <Option<String>>::describe(&mut registry);
        assert!(ty.nullable);
        assert_eq!(ty.class, registry.lookup("String").unwrap());
    }

    #[test]
    fn test_nested_containers() {
        let mut registry = ClassRegistry::new();
        let ty = <Option<Vec<[Option<bool>; 3]>>>::describe(&mut registry);

        assert!(ty.nullable);
        assert_eq!(kind_of(&registry, &ty), ClassKind::Sequence);

        let Some(TypeArgument::Type(array)) = ty.first_argument() else {
            panic!("expected a concrete element type");
        };
        assert!(!array.nullable);
        assert_eq!(kind_of(&registry, array), ClassKind::Array);

        let element = array.first_argument().and_then(TypeArgument::as_type).unwrap();
        assert!(element.nullable);
        assert_eq!(element.class, registry.lookup("bool").unwrap());
    }

    #[test]
    fn test_box_is_transparent() {
        let mut registry = ClassRegistry::new();
        assert_eq!(
            <Box<i32>>::describe(&mut registry),
            i32::describe(&mut registry)
        );
    }
}
