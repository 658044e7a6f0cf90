//! Core descriptors for schemagen.
//!
//! This crate provides the native side of schema generation:
//! - `class`: Class and member descriptors
//! - `use_site`: Use-site types (nullability and generic arguments)
//! - `registry`: Arena of class descriptors
//! - `describe`: The `Describe` trait and its std impls
//! - `type_expr`: Textual type expressions (`Vec<User?>?`)
//! - `manifest`: JSON class manifests

pub mod class;
pub mod describe;
pub mod manifest;
pub mod registry;
pub mod type_expr;
pub mod use_site;

pub use class::{ClassDescriptor, ClassId, ClassKind, MemberDescriptor};
pub use describe::Describe;
pub use manifest::{ClassManifest, LoadedManifest, ManifestError};
pub use registry::ClassRegistry;
pub use type_expr::TypeExprError;
pub use use_site::{TypeArgument, UseSiteType};
