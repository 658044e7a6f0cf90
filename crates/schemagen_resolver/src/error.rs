//! Resolution errors.

use crate::schema::SchemaType;
use miette::Diagnostic;
use schemagen_core::ClassDescriptor;
use std::fmt;
use thiserror::Error;

/// The outcome of a resolver: a node, absence (`None`) when the resolver does
/// not apply, or an error escalated by a composite.
pub type Resolution = Result<Option<SchemaType>, ResolveError>;

/// Whether a type is used in a response or a request position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Output,
    Input,
}

impl Direction {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Output => Self::Input,
            Self::Input => Self::Output,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Output => f.write_str("output"),
            Self::Input => f.write_str("input"),
        }
    }
}

/// The path of a member, `Class.member`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    pub class: String,
    pub member: String,
}

impl FieldPath {
    pub fn new(class: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            member: member.into(),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.class, self.member)
    }
}

/// An error that aborts resolution of the enclosing composite type.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ResolveError {
    /// No resolver in the chain produced a type for a member.
    #[error("can't resolve type at path `{path}`")]
    #[diagnostic(
        code(schemagen::unresolvable),
        help("no resolver in the chain accepts the member's type")
    )]
    Unresolvable { path: FieldPath },

    /// A member resolved to a type of the wrong direction.
    #[error("expected `{path}` to contain only {expected} types but found {found} types")]
    #[diagnostic(code(schemagen::direction_mismatch))]
    DirectionMismatch {
        path: FieldPath,
        expected: Direction,
        found: Direction,
    },

    /// A named schema type was requested for a class without a name.
    #[error("no class name for `{qualified_name}`")]
    #[diagnostic(code(schemagen::anonymous_class))]
    AnonymousClass { qualified_name: String },
}

impl ResolveError {
    /// Returns the member path, if the error is about a member.
    #[must_use]
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::Unresolvable { path } | Self::DirectionMismatch { path, .. } => Some(path),
            Self::AnonymousClass { .. } => None,
        }
    }
}

/// Returns the name of a class that needs a named schema type.
pub(crate) fn class_name(class: &ClassDescriptor) -> Result<&str, ResolveError> {
    class.name().ok_or_else(|| ResolveError::AnonymousClass {
        qualified_name: class.qualified_name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemagen_core::ClassKind;

    #[test]
    fn test_messages() {
        let err = ResolveError::Unresolvable {
            path: FieldPath::new("Test", "x"),
        };
        assert_eq!(err.to_string(), "can't resolve type at path `Test.x`");

        let err = ResolveError::DirectionMismatch {
            path: FieldPath::new("Test", "x"),
            expected: Direction::Output,
            found: Direction::Input,
        };
        assert_eq!(
            err.to_string(),
            "expected `Test.x` to contain only output types but found input types"
        );
        assert_eq!(err.path(), Some(&FieldPath::new("Test", "x")));
    }

    #[test]
    fn test_class_name() {
        let named = ClassDescriptor::new("User", ClassKind::Record);
        assert_eq!(class_name(&named), Ok("User"));

        let anonymous = ClassDescriptor::anonymous("app::{closure}", ClassKind::Class);
        assert_eq!(
            class_name(&anonymous),
            Err(ResolveError::AnonymousClass {
                qualified_name: "app::{closure}".to_string()
            })
        );
    }
}
