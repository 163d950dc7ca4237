//! Injector registries
//!
//! Storage behind the registration API. Keys are canonical (lower-cased,
//! separator-trimmed) type names.

use std::collections::BTreeMap;
use std::sync::Arc;

use autowire_domain::error::Result;
use autowire_domain::value_objects::{Instance, TypeName};
use dashmap::DashMap;

use super::resolver::Resolver;

/// Post-construction hook
///
/// Receives the built instance and a [`Resolver`] continuing the ongoing
/// resolution; a returned instance replaces the one handed onward.
pub type PrepareHook =
    Arc<dyn Fn(&Instance, &mut Resolver<'_>) -> Result<Option<Instance>> + Send + Sync>;

/// Shared-instance registry
///
/// A key is either marked (no instance yet) or holds its instance. Entries
/// are written while resolving, through a shared injector reference.
#[derive(Debug, Default)]
pub struct ShareRegistry {
    entries: DashMap<String, Option<Instance>>,
}

impl ShareRegistry {
    /// Mark `key` shared, keeping an already stored instance
    pub fn mark(&self, key: &str) {
        self.entries.entry(key.to_string()).or_insert(None);
    }

    /// Store an instance, returning the one it replaces
    pub fn store(&self, key: &str, instance: Instance) -> Option<Instance> {
        self.entries
            .insert(key.to_string(), Some(instance))
            .flatten()
    }

    /// Store `instance` when `key` is marked and still empty
    pub fn fill_if_marked(&self, key: &str, instance: &Instance) -> bool {
        match self.entries.get_mut(key) {
            Some(mut slot) if slot.is_none() => {
                *slot = Some(instance.clone());
                true
            }
            _ => false,
        }
    }

    /// Stored instance for `key`
    pub fn instance(&self, key: &str) -> Option<Instance> {
        self.entries.get(key).and_then(|slot| slot.value().clone())
    }

    /// Whether `key` is marked or holds an instance
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Forget `key`
    pub fn remove(&self, key: &str) -> Option<Option<Instance>> {
        self.entries.remove(key).map(|(_, slot)| slot)
    }

    /// Ordered snapshot of every entry
    pub fn snapshot(&self) -> BTreeMap<String, Option<Instance>> {
        self.entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

/// Prepare hooks in registration order
#[derive(Default, Clone)]
pub struct PrepareRegistry {
    hooks: Vec<(TypeName, PrepareHook)>,
}

impl PrepareRegistry {
    /// Append a hook for a type or interface name
    pub fn add(&mut self, name: TypeName, hook: PrepareHook) {
        self.hooks.push((name, hook));
    }

    /// Hooks whose key is one of `implemented`, in registration order
    pub fn matching<'a>(
        &'a self,
        implemented: &'a [TypeName],
    ) -> impl Iterator<Item = &'a PrepareHook> + 'a {
        self.hooks
            .iter()
            .filter(move |(name, _)| implemented.contains(name))
            .map(|(_, hook)| hook)
    }

    /// Number of hooks registered under each key
    pub fn counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for (name, _) in &self.hooks {
            *counts.entry(name.key().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Whether no hook is registered
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}
