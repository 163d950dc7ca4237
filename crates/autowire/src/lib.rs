//! # Autowire
//!
//! A recursive dependency injector that builds object graphs by reading
//! constructor signatures from a type catalog.
//!
//! This crate is the public API. It re-exports the domain types and the
//! injector with its supporting infrastructure.
//!
//! ## Features
//!
//! - **Autowiring**: Typed constructor parameters are constructed recursively
//! - **Aliases and Delegates**: Interfaces map to implementations or factories
//! - **Shared Instances**: Per-injector singletons, by name or by instance
//! - **Prepare Hooks**: Post-construction callbacks keyed by implemented type
//! - **Execution**: Functions, methods, closures and callable objects with
//!   resolved parameters
//! - **Reflection Caching**: Memoized metadata, selectable through configuration
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use autowire::{ClassDefinition, Injector, ParameterDescriptor, TypeCatalog};
//!
//! let mut catalog = TypeCatalog::new();
//! catalog
//!     .register(ClassDefinition::interface("App\\Clock"))
//!     .register(ClassDefinition::class("App\\SystemClock").implements("App\\Clock"));
//!
//! let mut injector = Injector::new(Arc::new(catalog));
//! injector.alias("App\\Clock", "App\\SystemClock")?.share("App\\Clock")?;
//!
//! let clock = injector.make("App\\Clock")?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Value objects, metadata ports and the error type
//! - `infrastructure` - Type catalog, reflectors, injector, config and logging

/// Domain layer - value objects, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use autowire_domain::*;
}

/// Infrastructure layer - injector, reflection, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use autowire_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the injector surface at the crate root
pub use infrastructure::config::{AppConfig, ConfigLoader};
pub use infrastructure::di::{
    BoundExecutable, Executable, I_ALIASES, I_ALL, I_BINDINGS, I_DELEGATES, I_PREPARES, I_SHARES,
    Injector, InspectFlags, Inspection, Resolver,
};
pub use infrastructure::logging::init_logging;
pub use infrastructure::reflection::{
    CachingReflector, ClassDefinition, FunctionDefinition, MethodDefinition, StandardReflector,
    TypeCatalog,
};
