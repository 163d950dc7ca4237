//! In-memory reflection cache backed by `DashMap`

use autowire_domain::ports::{CachedReflection, ReflectionCache};
use dashmap::DashMap;
use tracing::trace;

/// Concurrent map holding memoized reflection results
///
/// With a capacity set, entries beyond it are simply not retained; lookups
/// for them fall through to the type source again.
#[derive(Debug, Default)]
pub struct DashMapReflectionCache {
    entries: DashMap<String, CachedReflection>,
    capacity: Option<usize>,
}

impl DashMapReflectionCache {
    /// Unbounded cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache keeping at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Configured capacity, if bounded
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

impl ReflectionCache for DashMapReflectionCache {
    fn fetch(&self, key: &str) -> Option<CachedReflection> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn store(&self, key: &str, entry: CachedReflection) {
        let full = self
            .capacity
            .is_some_and(|capacity| self.entries.len() >= capacity);
        if full && !self.entries.contains_key(key) {
            trace!(key, "reflection cache full, entry not retained");
            return;
        }
        self.entries.insert(key.to_string(), entry);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
