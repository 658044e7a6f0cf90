//! Class and member descriptors.

use crate::use_site::UseSiteType;
use serde::{Deserialize, Serialize};

/// A class identifier, indexing a descriptor inside a [`ClassRegistry`].
///
/// [`ClassRegistry`]: crate::ClassRegistry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u32);

impl ClassId {
    /// Creates a class id from a raw index.
    #[must_use]
    pub const fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        self.0
    }
}

/// How a native type is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    /// A value/data type. Always treated as a composite.
    Record,
    /// A plain concrete class.
    Class,
    /// An abstract class.
    Abstract,
    /// An interface or trait.
    Interface,
    /// An enumeration with named constants.
    Enum,
    /// A scalar-backing native value type (`i32`, `String`, ...).
    Primitive,
    /// A growable sequence (`Vec<T>`).
    Sequence,
    /// A fixed-size array (`[T; N]`).
    Array,
    /// A box that marks its content as optional.
    Optional,
}

impl ClassKind {
    /// Returns true for sequence and array kinds.
    #[must_use]
    pub const fn is_list_like(self) -> bool {
        matches!(self, Self::Sequence | Self::Array)
    }
}

/// A named property of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescriptor {
    pub name: String,
    pub ty: UseSiteType,
}

impl MemberDescriptor {
    /// Creates a new member.
    pub fn new(name: impl Into<String>, ty: UseSiteType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A native declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    name: Option<String>,
    qualified_name: String,
    kind: ClassKind,
    members: Vec<MemberDescriptor>,
    constants: Vec<String>,
}

impl ClassDescriptor {
    /// Creates a named class with no members.
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        let name = name.into();
        Self {
            qualified_name: name.clone(),
            name: Some(name),
            kind,
            members: Vec::new(),
            constants: Vec::new(),
        }
    }

    /// Creates a class without a simple name (a closure or local type).
    pub fn anonymous(qualified_name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: None,
            qualified_name: qualified_name.into(),
            kind,
            members: Vec::new(),
            constants: Vec::new(),
        }
    }

    /// Sets the fully qualified name, used as the registry key.
    #[must_use]
    pub fn with_qualified_name(mut self, qualified_name: impl Into<String>) -> Self {
        self.qualified_name = qualified_name.into();
        self
    }

    /// Adds a member.
    #[must_use]
    pub fn with_member(mut self, name: impl Into<String>, ty: UseSiteType) -> Self {
        self.members.push(MemberDescriptor::new(name, ty));
        self
    }

    /// Sets the enum constants, in ordinal order.
    #[must_use]
    pub fn with_constants<I, S>(mut self, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constants = constants.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the simple name, if the class has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the fully qualified name.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    #[must_use]
    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// Returns the members in declaration order.
    #[must_use]
    pub fn members(&self) -> &[MemberDescriptor] {
        &self.members
    }

    /// Returns a member by name.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&MemberDescriptor> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Returns the enum constants in ordinal order.
    #[must_use]
    pub fn constants(&self) -> &[String] {
        &self.constants
    }

    #[must_use]
    pub fn is_enum(&self) -> bool {
        self.kind == ClassKind::Enum
    }

    /// Returns true for interfaces and abstract classes.
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        matches!(self.kind, ClassKind::Interface | ClassKind::Abstract)
    }

    pub(crate) fn set_members(&mut self, members: Vec<MemberDescriptor>) {
        self.members = members;
    }
}
