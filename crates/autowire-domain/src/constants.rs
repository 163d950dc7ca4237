//! Domain layer constants
//!
//! Markers and reserved names shared by the injector and the metadata
//! providers. Infrastructure-specific constants remain in
//! `autowire_infrastructure::constants`.

// ============================================================================
// TYPE NAME CONSTANTS
// ============================================================================

/// Namespace separator inside type names
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Separator between a type and a method in `"Type::method"` invokables
pub const METHOD_SEPARATOR: &str = "::";

/// Relative-static prefix accepted in `"Type::parent::method"` invokables
pub const PARENT_PREFIX: &str = "parent::";

/// Built-in type names that can never be auto-constructed
pub const SCALAR_TYPE_NAMES: [&str; 5] = ["int", "float", "bool", "string", "array"];

/// Method name of the call operator
pub const INVOKE_METHOD: &str = "__invoke";

// ============================================================================
// ARGUMENT KEY MARKERS
// ============================================================================

/// Key prefix binding a literal value to a parameter name
pub const RAW_MARKER: char = ':';

/// Key prefix binding the result of an invokable to a parameter name
pub const DELEGATE_MARKER: char = '+';

// ============================================================================
// DOC COMMENT CONSTANTS
// ============================================================================

/// Doc comment tag carrying parameter types
pub const PARAM_TAG: &str = "param";

/// Separator between alternative types in a doc comment type
pub const DOC_TYPE_SEPARATOR: char = '|';
