//! In-memory markup cache owned by a resolver.
//!
//! No eviction: entries live as long as the cache does. The map is
//! concurrent so a resolver shared across tasks needs no outer lock.

use dashmap::DashMap;

use crate::types::ResourceKey;

/// Markup cache keyed by [`ResourceKey`].
#[derive(Debug, Default)]
pub struct IconCache {
    entries: DashMap<ResourceKey, String>,
}

impl IconCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the cached markup for a key.
    pub fn get(&self, key: &ResourceKey) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Store markup, replacing any previous value for the key.
    pub fn insert(&self, key: ResourceKey, markup: String) {
        self.entries.insert(key, markup);
    }

    pub fn contains(&self, key: &ResourceKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
