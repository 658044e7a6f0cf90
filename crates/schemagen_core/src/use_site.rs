//! Use-site types.

use crate::class::ClassId;

/// A generic type argument at a point of use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeArgument {
    /// A wildcard or unbounded argument (`Vec<*>`).
    Star,
    /// A concrete argument.
    Type(UseSiteType),
}

impl TypeArgument {
    /// Returns the concrete type, if any.
    #[must_use]
    pub fn as_type(&self) -> Option<&UseSiteType> {
        match self {
            Self::Star => None,
            Self::Type(ty) => Some(ty),
        }
    }
}

/// A class plus the nullability and generic arguments at one point of use,
/// e.g. the declared type of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseSiteType {
    pub class: ClassId,
    pub nullable: bool,
    pub arguments: Vec<TypeArgument>,
}

impl UseSiteType {
    /// Creates a non-nullable use of a class without type arguments.
    #[must_use]
    pub fn new(class: ClassId) -> Self {
        Self {
            class,
            nullable: false,
            arguments: Vec::new(),
        }
    }

    /// Marks this use as nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Appends a concrete type argument.
    #[must_use]
    pub fn with_argument(mut self, argument: UseSiteType) -> Self {
        self.arguments.push(TypeArgument::Type(argument));
        self
    }

    /// Appends a wildcard type argument.
    #[must_use]
    pub fn with_star(mut self) -> Self {
        self.arguments.push(TypeArgument::Star);
        self
    }

    /// Returns the first type argument, if any.
    #[must_use]
    pub fn first_argument(&self) -> Option<&TypeArgument> {
        self.arguments.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments() {
        let string = UseSiteType::new(ClassId::from_raw(0));
        let list = UseSiteType::new(ClassId::from_raw(1))
            .nullable()
            .with_argument(string.clone());

        assert!(list.nullable);
        assert_eq!(
            list.first_argument().and_then(TypeArgument::as_type),
            Some(&string)
        );

        let star = UseSiteType::new(ClassId::from_raw(1)).with_star();
        assert_eq!(star.first_argument(), Some(&TypeArgument::Star));
        assert_eq!(star.first_argument().and_then(TypeArgument::as_type), None);
    }
}
