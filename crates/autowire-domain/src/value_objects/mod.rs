//! Domain Value Objects
//!
//! Runtime values handled by the injector and the structural metadata
//! describing the types it builds.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TypeName`] | Case-insensitive, separator-trimmed type name |
//! | [`Value`] | Tagged runtime value (scalars, arrays, objects, closures) |
//! | [`Instance`] | Shared object handle with identity |
//! | [`Closure`] | Callable value with its own parameter list |
//! | [`Arguments`] | Ordered positional/named argument map |
//! | [`ClassDescriptor`] | Resolved metadata of a type |
//! | [`FunctionDescriptor`] | Metadata and body of a constructor, method or function |
//! | [`ParameterDescriptor`] | One declared parameter |

/// Argument maps for `make`, `execute` and `define`
pub mod arguments;
/// Callable values
pub mod closure;
/// Class, function and parameter descriptors
pub mod descriptor;
/// Shared object handles
pub mod instance;
/// Canonical type names
pub mod type_name;
/// Tagged runtime values
pub mod value;

pub use arguments::{ArgumentKey, Arguments};
pub use closure::{Closure, ClosureBody};
pub use descriptor::{
    ClassDescriptor, ClassKind, ConstructorBody, FunctionBody, FunctionDescriptor, MethodBody,
    ParamTag, ParameterDescriptor, TypeHint, Visibility,
};
pub use instance::Instance;
pub use type_name::{TypeName, is_scalar_type, normalize_name};
pub use value::Value;
