//! Tracker-type registry
//!
//! Provides [`TypeRegistry`] for resolving the tracker products the system
//! knows how to talk to. Registration assigns dense ids starting at 1; the
//! ordered listing backs form population in adapting layers.

use deftrack_domain::{TrackerType, TypeId};

/// Registry of known tracker types
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    types: Vec<TrackerType>,
}

impl TypeRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { types: Vec::new() }
    }

    /// Create registry with the built-in tracker products
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("Bugzilla");
        registry.register("JIRA");
        registry.register("Microsoft TFS");
        registry.register("Version One");
        registry.register("HP Quality Center");
        registry
    }

    /// Register a tracker type, returning its assigned id
    pub fn register(&mut self, name: impl Into<String>) -> TypeId {
        let id = TypeId(self.types.len() as u32 + 1);
        self.types.push(TrackerType::new(id, name));
        id
    }

    /// Resolve a type id to its registered tracker type
    #[must_use]
    pub fn resolve(&self, id: TypeId) -> Option<&TrackerType> {
        self.types.iter().find(|t| t.id == id)
    }

    /// Check if a type id is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, id: TypeId) -> bool {
        self.resolve(id).is_some()
    }

    /// All registered types in registration order
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[TrackerType] {
        &self.types
    }

    /// List all registered type names
    #[inline]
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.name.as_str()).collect()
    }

    /// Get number of registered types
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over all registered types
    pub fn iter(&self) -> impl Iterator<Item = &TrackerType> {
        self.types.iter()
    }
}
