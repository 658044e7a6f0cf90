//! Schema type nodes.
//!
//! Named kinds (scalar, enum, object, input object) appear in the graph as
//! [`NamedType`] references; object, input object and enum definitions live
//! once in the [`TypeCache`](crate::TypeCache) of the run that produced them.

use crate::error::Direction;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Scalars every GraphQL schema provides without a declaration.
pub const SPEC_SCALARS: &[&str] = &["Int", "Float", "String", "Boolean", "ID"];

/// The name of the ID scalar.
pub const ID_SCALAR: &str = "ID";

/// The kind of a named schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NamedKind {
    Scalar,
    Enum,
    Object,
    InputObject,
}

impl NamedKind {
    /// Returns true if the kind may appear in a response position.
    #[must_use]
    pub const fn is_output(self) -> bool {
        !matches!(self, Self::InputObject)
    }

    /// Returns true if the kind may appear in a request position.
    #[must_use]
    pub const fn is_input(self) -> bool {
        !matches!(self, Self::Object)
    }
}

/// A reference to a named schema type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NamedType {
    pub kind: NamedKind,
    pub name: String,
}

impl NamedType {
    pub fn new(kind: NamedKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// A resolved schema type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum SchemaType {
    Named(NamedType),
    List(Box<SchemaType>),
    NonNull(Box<SchemaType>),
}

impl SchemaType {
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::Named(NamedType::new(NamedKind::Scalar, name))
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::Named(NamedType::new(NamedKind::Enum, name))
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::Named(NamedType::new(NamedKind::Object, name))
    }

    pub fn input_object(name: impl Into<String>) -> Self {
        Self::Named(NamedType::new(NamedKind::InputObject, name))
    }

    /// The ID scalar.
    #[must_use]
    pub fn id() -> Self {
        Self::scalar(ID_SCALAR)
    }

    #[must_use]
    pub fn list(inner: SchemaType) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wraps in a non-null layer. A non-null type is returned unchanged.
    #[must_use]
    pub fn non_null(inner: SchemaType) -> Self {
        match inner {
            Self::NonNull(_) => inner,
            _ => Self::NonNull(Box::new(inner)),
        }
    }

    #[must_use]
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Applies the nullability of the originating use-site type: a non-null
    /// node and a nullable use stay as they are, anything else gets a
    /// non-null layer.
    #[must_use]
    pub fn wrap_non_null(self, nullable: bool) -> Self {
        if self.is_non_null() || nullable {
            self
        } else {
            Self::NonNull(Box::new(self))
        }
    }

    /// Removes one non-null layer, if present.
    #[must_use]
    pub fn strip_non_null(self) -> Self {
        match self {
            Self::NonNull(inner) => *inner,
            other => other,
        }
    }

    /// Returns the innermost named type.
    #[must_use]
    pub fn named_type(&self) -> &NamedType {
        match self {
            Self::Named(named) => named,
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
        }
    }

    /// Returns true if every leaf may appear in a response position.
    #[must_use]
    pub fn is_output(&self) -> bool {
        self.named_type().kind.is_output()
    }

    /// Returns true if every leaf may appear in a request position.
    #[must_use]
    pub fn is_input(&self) -> bool {
        self.named_type().kind.is_input()
    }

    /// Returns true if the type may be used in the given direction.
    #[must_use]
    pub fn supports(&self, direction: Direction) -> bool {
        match direction {
            Direction::Output => self.is_output(),
            Direction::Input => self.is_input(),
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => f.write_str(&named.name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// A field of an object or input object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    pub name: String,
    pub ty: SchemaType,
}

/// An object or input object definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositeDef {
    pub name: String,
    pub fields: IndexMap<String, FieldDef>,
}

impl CompositeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Adds a field, keeping declaration order.
    pub fn add_field(&mut self, name: impl Into<String>, ty: SchemaType) {
        let name = name.into();
        self.fields.insert(name.clone(), FieldDef { name, ty });
    }

    /// Gets a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }
}

/// An enum value and its ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValueDef {
    pub name: String,
    pub ordinal: u32,
}

/// An enum definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDef {
    pub name: String,
    pub values: Vec<EnumValueDef>,
}

/// A named type definition stored in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeDefinition {
    Object(CompositeDef),
    InputObject(CompositeDef),
    Enum(EnumDef),
}

impl TypeDefinition {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Object(def) | Self::InputObject(def) => &def.name,
            Self::Enum(def) => &def.name,
        }
    }

    #[must_use]
    pub fn kind(&self) -> NamedKind {
        match self {
            Self::Object(_) => NamedKind::Object,
            Self::InputObject(_) => NamedKind::InputObject,
            Self::Enum(_) => NamedKind::Enum,
        }
    }

    /// Returns the fields of an object or input object.
    #[must_use]
    pub fn fields(&self) -> Option<&IndexMap<String, FieldDef>> {
        match self {
            Self::Object(def) | Self::InputObject(def) => Some(&def.fields),
            Self::Enum(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let ty = SchemaType::non_null(SchemaType::list(SchemaType::non_null(
            SchemaType::scalar("String"),
        )));
        insta::assert_snapshot!(ty.to_string(), @"[String!]!");
    }

    #[test]
    fn test_wrap_non_null() {
        let string = SchemaType::scalar("String");
        assert_eq!(string.clone().wrap_non_null(true), string);
        assert_eq!(
            string.clone().wrap_non_null(false),
            SchemaType::NonNull(Box::new(string.clone()))
        );

        // never nested
        let wrapped = string.clone().wrap_non_null(false).wrap_non_null(false);
        assert_eq!(wrapped.to_string(), "String!");
        assert_eq!(SchemaType::non_null(wrapped.clone()), wrapped);
    }

    #[test]
    fn test_strip_non_null() {
        let string = SchemaType::scalar("String");
        assert_eq!(string.clone().wrap_non_null(false).strip_non_null(), string);
        assert_eq!(string.clone().strip_non_null(), string);
    }

    #[test]
    fn test_direction() {
        let object = SchemaType::list(SchemaType::object("User"));
        let input = SchemaType::non_null(SchemaType::input_object("UserInput"));
        let scalar = SchemaType::scalar("Int");

        assert!(object.is_output() && !object.is_input());
        assert!(input.is_input() && !input.is_output());
        assert!(scalar.supports(Direction::Output) && scalar.supports(Direction::Input));
        assert_eq!(input.named_type().name, "UserInput");
    }
}
