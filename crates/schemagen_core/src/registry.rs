//! Arena of class descriptors.

use crate::class::{ClassDescriptor, ClassId, ClassKind, MemberDescriptor};
use rustc_hash::FxHashMap;

/// Names of the pre-registered container classes.
pub mod builtins {
    pub const VEC: &str = "Vec";
    pub const VEC_DEQUE: &str = "VecDeque";
    pub const ARRAY: &str = "Array";
    pub const OPTIONAL: &str = "Optional";

    /// Native value types registered as primitives.
    pub const PRIMITIVES: &[&str] = &[
        "String", "str", "bool", "char", "i8", "i16", "i32", "i64", "i128", "u8", "u16", "u32",
        "u64", "f32", "f64", "Decimal", "Uuid",
    ];
}

/// Stores every class descriptor of a run, keyed by qualified name.
///
/// Ids are stable for the lifetime of the registry, so descriptors refer to
/// each other by [`ClassId`] and cyclic type graphs stay finite.
#[derive(Debug)]
pub struct ClassRegistry {
    classes: Vec<ClassDescriptor>,
    by_name: FxHashMap<String, ClassId>,
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRegistry {
    /// Creates a registry with the built-in primitives and containers pre-registered.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            classes: Vec::new(),
            by_name: FxHashMap::default(),
        };

        for name in builtins::PRIMITIVES {
            registry.declare(ClassDescriptor::new(*name, ClassKind::Primitive));
        }
        for (name, kind) in [
            (builtins::VEC, ClassKind::Sequence),
            (builtins::VEC_DEQUE, ClassKind::Sequence),
            (builtins::ARRAY, ClassKind::Array),
            (builtins::OPTIONAL, ClassKind::Optional),
        ] {
            registry.declare(ClassDescriptor::new(name, kind));
        }

        registry
    }

    /// Registers a class, returning the existing id if its qualified name is taken.
    ///
    /// # Panics
    ///
    /// Panics if the registry already holds `u32::MAX` classes.
    pub fn declare(&mut self, class: ClassDescriptor) -> ClassId {
        if let Some(&id) = self.by_name.get(class.qualified_name()) {
            return id;
        }

        let Ok(raw) = u32::try_from(self.classes.len()) else {
            panic!("class registry is full: more than {} classes", u32::MAX);
        };
        let id = ClassId::from_raw(raw);
        self.by_name.insert(class.qualified_name().to_string(), id);
        self.classes.push(class);
        id
    }

    /// Registers a class and fills its members afterwards.
    ///
    /// The class is visible under its id before `members` runs, so a member
    /// type referring back to the class resolves to the same id.
    pub fn declare_with<F>(&mut self, class: ClassDescriptor, members: F) -> ClassId
    where
        F: FnOnce(&mut Self) -> Vec<MemberDescriptor>,
    {
        if let Some(&id) = self.by_name.get(class.qualified_name()) {
            return id;
        }

        let id = self.declare(class);
        let members = members(self);
        self.set_members(id, members);
        id
    }

    /// Returns the id of a built-in or previously declared class, declaring a
    /// primitive under `name` when it is unknown.
    pub fn primitive(&mut self, name: &str) -> ClassId {
        self.declare(ClassDescriptor::new(name, ClassKind::Primitive))
    }

    /// Replaces the members of a class.
    pub fn set_members(&mut self, id: ClassId, members: Vec<MemberDescriptor>) {
        if let Some(class) = self.classes.get_mut(id.as_raw() as usize) {
            class.set_members(members);
        }
    }

    /// Looks up a class by qualified name.
    #[must_use]
    pub fn lookup(&self, qualified_name: &str) -> Option<ClassId> {
        self.by_name.get(qualified_name).copied()
    }

    /// Gets a class by id.
    #[must_use]
    pub fn get(&self, id: ClassId) -> Option<&ClassDescriptor> {
        self.classes.get(id.as_raw() as usize)
    }

    /// Returns the number of registered classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if no classes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
