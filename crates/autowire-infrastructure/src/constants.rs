//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Markers and reserved names of the injector itself live in
//! `autowire_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "autowire.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "autowire";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "AUTOWIRE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "AUTOWIRE_LOG";

/// Daily log files kept by default
pub const LOG_MAX_FILES: usize = 5;

/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "autowire";

// ============================================================================
// REFLECTION CONSTANTS
// ============================================================================

/// Whether the memoizing reflector is used by default
pub const DEFAULT_REFLECTION_CACHING: bool = true;

/// Method name under which constructors are registered
pub const CONSTRUCTOR_METHOD: &str = "__construct";

/// Name reported for closures in diagnostics
pub const CLOSURE_NAME: &str = "{closure}";

/// Reflection cache key prefix for class descriptors
pub const CACHE_KEY_CLASS: &str = "class";

/// Reflection cache key prefix for constructors
pub const CACHE_KEY_CONSTRUCTOR: &str = "ctor";

/// Reflection cache key prefix for constructor parameter lists
pub const CACHE_KEY_CONSTRUCTOR_PARAMS: &str = "ctor-params";

/// Reflection cache key prefix for free functions
pub const CACHE_KEY_FUNCTION: &str = "function";

/// Reflection cache key prefix for methods
pub const CACHE_KEY_METHOD: &str = "method";

/// Reflection cache key prefix for parsed doc comment tags
pub const CACHE_KEY_PARAM_TAGS: &str = "param-tags";

/// Reflection cache key prefix for parameter type hints
pub const CACHE_KEY_TYPE_HINT: &str = "type-hint";

/// Reflection cache key prefix for implemented-type sets
pub const CACHE_KEY_IMPLEMENTED: &str = "implemented";
