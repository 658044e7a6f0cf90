//! Schema configuration.

use crate::resolvers::is_plain_composite;
use indexmap::IndexMap;
use schemagen_core::ClassDescriptor;
use serde::{Deserialize, Serialize};

/// The suffix that marks a class as an input type by default.
pub const DEFAULT_INPUT_SUFFIX: &str = "Input";

/// A native type mapped onto a scalar, e.g. `Url` onto `String`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarMapping {
    pub native: String,
    pub scalar: String,
}

impl ScalarMapping {
    pub fn new(native: impl Into<String>, scalar: impl Into<String>) -> Self {
        Self {
            native: native.into(),
            scalar: scalar.into(),
        }
    }
}

/// Decisions the engine delegates to the caller.
pub trait SchemaConfiguration {
    /// Returns true if the class maps onto an input object.
    fn is_input_type(&self, class: &ClassDescriptor) -> bool {
        has_input_suffix(class, DEFAULT_INPUT_SUFFIX)
    }

    /// Additional scalar mappings, merged into the scalar resolver when the
    /// default chain is built.
    fn extra_scalars(&self) -> Vec<ScalarMapping> {
        Vec::new()
    }
}

/// The naming convention for input types: a plain composite whose name ends
/// in `suffix`.
#[must_use]
pub fn has_input_suffix(class: &ClassDescriptor, suffix: &str) -> bool {
    class.name().is_some_and(|name| name.ends_with(suffix)) && is_plain_composite(class)
}

/// Serializable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Name suffix that marks input types.
    pub input_suffix: String,
    /// Native type name to scalar name.
    pub scalars: IndexMap<String, String>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            input_suffix: DEFAULT_INPUT_SUFFIX.to_string(),
            scalars: IndexMap::new(),
        }
    }
}

impl SchemaConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input type suffix.
    #[must_use]
    pub fn with_input_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.input_suffix = suffix.into();
        self
    }

    /// Maps a native type onto a scalar.
    #[must_use]
    pub fn with_scalar(mut self, native: impl Into<String>, scalar: impl Into<String>) -> Self {
        self.scalars.insert(native.into(), scalar.into());
        self
    }
}

impl SchemaConfiguration for SchemaConfig {
    fn is_input_type(&self, class: &ClassDescriptor) -> bool {
        has_input_suffix(class, &self.input_suffix)
    }

    fn extra_scalars(&self) -> Vec<ScalarMapping> {
        self.scalars
            .iter()
            .map(|(native, scalar)| ScalarMapping::new(native, scalar))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemagen_core::ClassKind;

    #[test]
    fn test_default_input_convention() {
        let config = SchemaConfig::default();
        assert!(config.is_input_type(&ClassDescriptor::new("UserInput", ClassKind::Record)));
        assert!(config.is_input_type(&ClassDescriptor::new("UserInput", ClassKind::Class)));
        assert!(!config.is_input_type(&ClassDescriptor::new("User", ClassKind::Record)));
        assert!(!config.is_input_type(&ClassDescriptor::new("RoleInput", ClassKind::Enum)));
        assert!(!config.is_input_type(&ClassDescriptor::new(
            "ShapeInput",
            ClassKind::Interface
        )));
    }

    #[test]
    fn test_custom_suffix() {
        let config = SchemaConfig::new().with_input_suffix("Args");
        assert!(config.is_input_type(&ClassDescriptor::new("SearchArgs", ClassKind::Record)));
        assert!(!config.is_input_type(&ClassDescriptor::new("SearchInput", ClassKind::Record)));
    }

    #[test]
    fn test_trait_defaults() {
        struct Defaults;
        impl SchemaConfiguration for Defaults {}

        assert!(Defaults.is_input_type(&ClassDescriptor::new("TestInput", ClassKind::Record)));
        assert!(Defaults.extra_scalars().is_empty());
    }

    #[test]
    fn test_deserialize() {
        let config: SchemaConfig =
            serde_json::from_str(r#"{ "scalars": { "Url": "String" } }"#).unwrap();
        assert_eq!(config.input_suffix, DEFAULT_INPUT_SUFFIX);
        assert_eq!(config.extra_scalars(), vec![ScalarMapping::new("Url", "String")]);
    }
}
