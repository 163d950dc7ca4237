//! Metadata Provider Port
//!
//! The injector asks a [`Reflector`] for the shape of every type it builds.
//! Two implementations share this contract: a direct one that consults the
//! [`TypeSource`] on every call and a memoizing decorator. Callers must not
//! care which one they hold.

use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::{
    Arguments, ClassDescriptor, FunctionDescriptor, ParameterDescriptor, TypeHint, TypeName,
};

/// Source of raw type declarations
///
/// Stands in for the host's native introspection facility. Lookups return
/// `None` for unknown names; the reflector turns that into a class load
/// failure.
pub trait TypeSource: Send + Sync {
    /// Describe a type by name
    fn describe_class(&self, name: &str) -> Option<ClassDescriptor>;

    /// Describe a free function by name
    fn describe_function(&self, name: &str) -> Option<FunctionDescriptor>;
}

/// Structural metadata lookups used during resolution
pub trait Reflector: Send + Sync {
    /// Descriptor of a type, failing with a class load error when unknown
    fn class_of(&self, name: &str) -> Result<Arc<ClassDescriptor>>;

    /// Constructor of a type, `None` when it is built without arguments
    fn constructor_of(&self, name: &str) -> Result<Option<Arc<FunctionDescriptor>>>;

    /// Constructor parameters of a type, `None` when it has no constructor
    fn constructor_params(&self, name: &str) -> Result<Option<Arc<[ParameterDescriptor]>>>;

    /// Descriptor of a free function
    fn function_of(&self, name: &str) -> Result<Arc<FunctionDescriptor>>;

    /// Descriptor of a method, including inherited methods
    fn method_of(&self, class: &str, method: &str) -> Result<Arc<FunctionDescriptor>>;

    /// Effective type of a parameter
    ///
    /// A declared class type wins. Otherwise the owning callable's doc
    /// comment `@param` tags are disambiguated against `args`.
    fn param_type_hint(
        &self,
        function: &FunctionDescriptor,
        param: &ParameterDescriptor,
        args: &Arguments,
    ) -> Result<TypeHint>;

    /// The type itself plus every ancestor and interface it implements
    fn implemented_by(&self, name: &str) -> Result<Arc<[TypeName]>>;

    /// Whether the type exists at all
    fn class_exists(&self, name: &str) -> bool {
        self.class_of(name).is_ok()
    }
}
