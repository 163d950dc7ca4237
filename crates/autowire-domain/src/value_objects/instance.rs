//! Shared object instances
//!
//! An [`Instance`] is a handle with identity: cloning the handle shares the
//! underlying object, so a mutation through one handle is visible through
//! every other. Equality compares state (class and properties), identity is
//! checked with [`Instance::ptr_eq`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;

use super::type_name::TypeName;
use super::value::Value;

struct InstanceData {
    class: TypeName,
    properties: DashMap<String, Value>,
}

/// Handle to a constructed object
#[derive(Clone)]
pub struct Instance(Arc<InstanceData>);

impl Instance {
    /// Allocate an empty instance of the given class
    pub fn new(class: impl Into<TypeName>) -> Self {
        Self(Arc::new(InstanceData {
            class: class.into(),
            properties: DashMap::new(),
        }))
    }

    /// Concrete class of this instance
    pub fn class(&self) -> &TypeName {
        &self.0.class
    }

    /// Read a property, `None` when it was never assigned
    pub fn get(&self, property: &str) -> Option<Value> {
        self.0.properties.get(property).map(|v| v.value().clone())
    }

    /// Read a property, `Value::Null` when it was never assigned
    pub fn prop(&self, property: &str) -> Value {
        self.get(property).unwrap_or_default()
    }

    /// Assign a property
    pub fn set(&self, property: impl Into<String>, value: impl Into<Value>) {
        self.0.properties.insert(property.into(), value.into());
    }

    /// Whether the property was assigned
    pub fn has(&self, property: &str) -> bool {
        self.0.properties.contains_key(property)
    }

    /// Snapshot of every property, ordered by name
    pub fn properties(&self) -> BTreeMap<String, Value> {
        self.0
            .properties
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Whether both handles point at the same object
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        self.class() == other.class() && self.properties() == other.properties()
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct(self.class().as_str());
        for (name, value) in self.properties() {
            out.field(&name, &value);
        }
        out.finish()
    }
}
