//! Memoization of named schema types.

use crate::error::ResolveError;
use crate::schema::{NamedType, SchemaType, TypeDefinition};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

/// A cached named type.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The node handed out for every resolution of this name.
    pub node: SchemaType,
    /// The definition, `None` while it is still being built.
    pub definition: Option<Rc<TypeDefinition>>,
    /// Lookups served from the cache after the first resolution.
    pub hits: u64,
}

impl CacheEntry {
    /// Returns true once the definition has been built.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.definition.is_some()
    }
}

/// Named types resolved during one run, in first-resolution order.
///
/// A name maps to at most one entry. The entry is inserted before its
/// definition is produced, so a producer that re-enters the cache for the
/// same name (a self- or mutually-referential type) gets a hit on the
/// in-progress entry instead of recursing.
///
/// Production is single-writer per name; the cache is not `Sync`.
#[derive(Debug, Default)]
pub struct TypeCache {
    entries: RefCell<IndexMap<String, CacheEntry>>,
}

impl TypeCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached node for `named`, or produces its definition.
    ///
    /// A hit increments the entry's hit counter. On a miss `produce` runs
    /// exactly once; if it fails, the entry and every entry inserted after it
    /// are removed and the error returned. Those later entries were built
    /// while this one was in progress and may refer to it.
    pub fn get_or_compute<F>(&self, named: NamedType, produce: F) -> Result<SchemaType, ResolveError>
    where
        F: FnOnce() -> Result<TypeDefinition, ResolveError>,
    {
        let index = {
            let mut entries = self.entries.borrow_mut();
            if let Some(entry) = entries.get_mut(&named.name) {
                entry.hits += 1;
                tracing::trace!(name = %named.name, hits = entry.hits, "type cache hit");
                return Ok(entry.node.clone());
            }

            entries.insert(
                named.name.clone(),
                CacheEntry {
                    node: SchemaType::Named(named.clone()),
                    definition: None,
                    hits: 0,
                },
            );
            entries.len() - 1
        };

        match produce() {
            Ok(definition) => {
                if let Some(entry) = self.entries.borrow_mut().get_mut(&named.name) {
                    entry.definition = Some(Rc::new(definition));
                }
                Ok(SchemaType::Named(named))
            }
            Err(err) => {
                let mut entries = self.entries.borrow_mut();
                tracing::trace!(
                    name = %named.name,
                    dropped = entries.len() - index,
                    "type cache rollback"
                );
                entries.truncate(index);
                Err(err)
            }
        }
    }

    /// Returns true if the name has an entry.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.borrow().contains_key(name)
    }

    /// Returns a snapshot of an entry.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<CacheEntry> {
        self.entries.borrow().get(name).cloned()
    }

    /// Returns the definition of a name, once built.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<Rc<TypeDefinition>> {
        self.entries
            .borrow()
            .get(name)
            .and_then(|entry| entry.definition.clone())
    }

    /// Returns every built definition in first-resolution order.
    #[must_use]
    pub fn definitions(&self) -> Vec<Rc<TypeDefinition>> {
        self.entries
            .borrow()
            .values()
            .filter_map(|entry| entry.definition.clone())
            .collect()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns true if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldPath;
    use crate::schema::{CompositeDef, EnumDef, NamedKind};
    use std::cell::Cell;

    fn color() -> NamedType {
        NamedType::new(NamedKind::Enum, "Color")
    }

    fn color_def() -> Result<TypeDefinition, ResolveError> {
        Ok(TypeDefinition::Enum(EnumDef {
            name: "Color".to_string(),
            values: Vec::new(),
        }))
    }

    #[test]
    fn test_first_access_produces() {
        let cache = TypeCache::new();
        let node = cache.get_or_compute(color(), color_def).unwrap();

        assert_eq!(node, SchemaType::enumeration("Color"));
        let entry = cache.entry("Color").unwrap();
        assert_eq!(entry.hits, 0);
        assert!(entry.is_complete());
    }

    #[test]
    fn test_hits_and_single_production() {
        let cache = TypeCache::new();
        let calls = Cell::new(0);
        for _ in 0..4 {
            cache
                .get_or_compute(color(), || {
                    calls.set(calls.get() + 1);
                    color_def()
                })
                .unwrap();
        }

        assert_eq!(calls.get(), 1);
        assert_eq!(cache.entry("Color").unwrap().hits, 3);
    }

    #[test]
    fn test_definition_is_shared() {
        let cache = TypeCache::new();
        cache.get_or_compute(color(), color_def).unwrap();
        let first = cache.definition("Color").unwrap();
        cache.get_or_compute(color(), color_def).unwrap();
        let second = cache.definition("Color").unwrap();
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_reentrant_production() {
        let cache = TypeCache::new();
        let node = NamedType::new(NamedKind::Object, "Node");

        let result = cache.get_or_compute(node.clone(), || {
            let mut def = CompositeDef::new("Node");
            // self reference while in progress
            let next = cache.get_or_compute(node.clone(), || unreachable!())?;
            assert!(!cache.entry("Node").unwrap().is_complete());
            def.add_field("next", next);
            Ok(TypeDefinition::Object(def))
        });

        assert_eq!(result.unwrap(), SchemaType::object("Node"));
        let entry = cache.entry("Node").unwrap();
        assert_eq!(entry.hits, 1);
        assert!(entry.is_complete());
    }

    #[test]
    fn test_failed_production_is_removed() {
        let cache = TypeCache::new();
        let err = ResolveError::Unresolvable {
            path: FieldPath::new("Broken", "x"),
        };

        let result = cache.get_or_compute(NamedType::new(NamedKind::Object, "Broken"), || {
            Err(err.clone())
        });

        assert_eq!(result, Err(err));
        assert!(!cache.contains("Broken"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_failed_production_rolls_back_dependents() {
        let cache = TypeCache::new();
        cache.get_or_compute(color(), color_def).unwrap();
        let book = NamedType::new(NamedKind::Object, "Book");
        let err = ResolveError::Unresolvable {
            path: FieldPath::new("Book", "bad"),
        };

        let result = cache.get_or_compute(book.clone(), || {
            cache.get_or_compute(NamedType::new(NamedKind::Object, "Author"), || {
                let mut def = CompositeDef::new("Author");
                def.add_field("book", cache.get_or_compute(book.clone(), || unreachable!())?);
                Ok(TypeDefinition::Object(def))
            })?;
            assert!(cache.entry("Author").unwrap().is_complete());
            Err(err.clone())
        });

        assert_eq!(result, Err(err));
        assert!(!cache.contains("Book"));
        assert!(!cache.contains("Author"));
        assert!(cache.entry("Color").unwrap().is_complete());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_definitions_in_order() {
        let cache = TypeCache::new();
        cache
            .get_or_compute(NamedType::new(NamedKind::Object, "B"), || {
                Ok(TypeDefinition::Object(CompositeDef::new("B")))
            })
            .unwrap();
        cache.get_or_compute(color(), color_def).unwrap();

        let names: Vec<_> = cache
            .definitions()
            .iter()
            .map(|def| def.name().to_string())
            .collect();
        assert_eq!(names, ["B", "Color"]);
    }
}
