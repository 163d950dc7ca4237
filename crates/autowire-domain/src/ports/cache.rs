//! Reflection Cache Port
//!
//! Backing store for the memoizing reflector. Entries are never invalidated
//! within a reflector's lifetime: type metadata is immutable for the process.

use std::sync::Arc;

use crate::value_objects::{
    ClassDescriptor, FunctionDescriptor, ParamTag, ParameterDescriptor, TypeHint, TypeName,
};

/// One memoized reflection result
#[derive(Debug, Clone)]
pub enum CachedReflection {
    /// Descriptor of a type
    Class(Arc<ClassDescriptor>),
    /// Constructor of a type, `None` when absent
    Constructor(Option<Arc<FunctionDescriptor>>),
    /// Constructor parameters of a type, `None` when absent
    ConstructorParams(Option<Arc<[ParameterDescriptor]>>),
    /// Descriptor of a free function or method
    Function(Arc<FunctionDescriptor>),
    /// Parsed `@param` tags of a callable
    ParamTags(Arc<[ParamTag]>),
    /// Resolved type hint of a parameter
    TypeHint(TypeHint),
    /// Implemented-type set of a type
    Implemented(Arc<[TypeName]>),
}

/// Key/value store for reflection results
pub trait ReflectionCache: Send + Sync {
    /// Fetch a previously stored entry
    fn fetch(&self, key: &str) -> Option<CachedReflection>;

    /// Store an entry, replacing any previous one
    fn store(&self, key: &str, entry: CachedReflection);

    /// Number of stored entries
    fn len(&self) -> usize;

    /// Whether nothing is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
