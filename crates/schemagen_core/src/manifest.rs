//! JSON class manifests.
//!
//! A manifest stands in for classpath scanning: it lists the classes of a
//! program and the roots to generate.
//!
//! ```json
//! {
//!   "classes": [
//!     { "name": "User", "kind": "record", "members": [
//!       { "name": "id", "type": "i64" },
//!       { "name": "friends", "type": "Vec<User>?" }
//!     ] },
//!     { "name": "Role", "kind": "enum", "values": ["ADMIN", "MEMBER"] }
//!   ],
//!   "roots": ["User"]
//! }
//! ```

use crate::class::{ClassDescriptor, ClassId, ClassKind, MemberDescriptor};
use crate::registry::ClassRegistry;
use crate::type_expr::{self, TypeExprError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error while loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid manifest: {0}")]
    Json(#[from] serde_json::Error),
    #[error("class `{name}` is declared more than once")]
    DuplicateClass { name: String },
    #[error("invalid type for `{class}.{member}`: {source}")]
    MemberType {
        class: String,
        member: String,
        #[source]
        source: TypeExprError,
    },
    #[error("root `{name}` is not a declared class")]
    UnknownRoot { name: String },
}

fn default_kind() -> ClassKind {
    ClassKind::Record
}

/// A class entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassEntry {
    pub name: String,
    #[serde(default = "default_kind")]
    pub kind: ClassKind,
    #[serde(default)]
    pub members: Vec<MemberEntry>,
    /// Enum constants, in ordinal order.
    #[serde(default)]
    pub values: Vec<String>,
}

/// A member entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberEntry {
    pub name: String,
    /// A type expression, e.g. `Vec<String?>`.
    #[serde(rename = "type")]
    pub ty: String,
}

/// The classes of a program and the roots to generate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassManifest {
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
    /// Root class names. Defaults to every declared class.
    #[serde(default)]
    pub roots: Vec<String>,
}

/// A registry populated from a manifest, plus the root ids.
#[derive(Debug)]
pub struct LoadedManifest {
    pub registry: ClassRegistry,
    pub roots: Vec<ClassId>,
}

impl ClassManifest {
    /// Parses a manifest from JSON.
    pub fn from_json(source: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Builds a registry from this manifest.
    ///
    /// Every class is declared before any member type is parsed, so members
    /// may refer to classes declared later, including their own class.
    pub fn load(&self) -> Result<LoadedManifest, ManifestError> {
        let mut registry = ClassRegistry::new();
        let mut ids = Vec::with_capacity(self.classes.len());

        for entry in &self.classes {
            if registry.lookup(&entry.name).is_some() {
                return Err(ManifestError::DuplicateClass {
                    name: entry.name.clone(),
                });
            }
            let class = ClassDescriptor::new(entry.name.clone(), entry.kind)
                .with_constants(entry.values.iter().cloned());
            ids.push(registry.declare(class));
        }

        for (entry, &id) in self.classes.iter().zip(&ids) {
            let members = entry
                .members
                .iter()
                .map(|member| {
                    type_expr::parse(&member.ty, &registry)
                        .map(|ty| MemberDescriptor::new(member.name.clone(), ty))
                        .map_err(|source| ManifestError::MemberType {
                            class: entry.name.clone(),
                            member: member.name.clone(),
                            source,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            registry.set_members(id, members);
        }

        let roots = if self.roots.is_empty() {
            ids
        } else {
            self.roots
                .iter()
                .map(|name| {
                    registry
                        .lookup(name)
                        .ok_or_else(|| ManifestError::UnknownRoot { name: name.clone() })
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(LoadedManifest { registry, roots })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USERS: &str = r#"{
        "classes": [
            { "name": "User", "members": [
                { "name": "id", "type": "i64" },
                { "name": "friends", "type": "Vec<User>?" },
                { "name": "role", "type": "Role" }
            ] },
            { "name": "Role", "kind": "enum", "values": ["ADMIN", "MEMBER"] }
        ],
        "roots": ["User"]
    }"#;

    #[test]
    fn test_load_cyclic_manifest() {
        let loaded = ClassManifest::from_json(USERS).unwrap().load().unwrap();
        let registry = &loaded.registry;

        let user_id = registry.lookup("User").unwrap();
        assert_eq!(loaded.roots, vec![user_id]);

        let user = registry.get(user_id).unwrap();
        assert_eq!(user.kind(), ClassKind::Record);
        assert_eq!(user.members().len(), 3);

        let friends = user.member("friends").unwrap();
        assert!(friends.ty.nullable);
        assert_eq!(
            friends.ty.first_argument().and_then(|a| a.as_type()).unwrap().class,
            user_id
        );

        let role = registry.get(registry.lookup("Role").unwrap()).unwrap();
        assert!(role.is_enum());
        assert_eq!(role.constants(), ["ADMIN", "MEMBER"]);
    }

    #[test]
    fn test_roots_default_to_all_classes() {
        let manifest = ClassManifest::from_json(
            r#"{ "classes": [ { "name": "A" }, { "name": "B", "kind": "class" } ] }"#,
        )
        .unwrap();
        let loaded = manifest.load().unwrap();
        assert_eq!(loaded.roots.len(), 2);
    }

    #[test]
    fn test_duplicate_class() {
        let manifest =
            ClassManifest::from_json(r#"{ "classes": [ { "name": "A" }, { "name": "A" } ] }"#)
                .unwrap();
        assert!(matches!(
            manifest.load(),
            Err(ManifestError::DuplicateClass { name }) if name == "A"
        ));
    }

    #[test]
    fn test_bad_member_type() {
        let manifest = ClassManifest::from_json(
            r#"{ "classes": [ { "name": "A", "members": [ { "name": "x", "type": "Nope" } ] } ] }"#,
        )
        .unwrap();
        let err = manifest.load().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid type for `A.x`: unknown class `Nope` at offset 0"
        );
    }

    #[test]
    fn test_unknown_root() {
        let manifest =
            ClassManifest::from_json(r#"{ "classes": [], "roots": ["Ghost"] }"#).unwrap();
        assert!(matches!(
            manifest.load(),
            Err(ManifestError::UnknownRoot { name }) if name == "Ghost"
        ));
    }
}
