// Clippy allows for nested registry checks
#![allow(clippy::collapsible_if)]

//! # Infrastructure Layer
//!
//! Runtime machinery behind the domain ports: the type catalog and the
//! reflectors reading it, the injector, configuration and logging.
//!
//! ## Module Categories
//!
//! ### Reflection
//! | Module | Description |
//! |--------|-------------|
//! | [`reflection`] | Type catalog, standard and caching reflectors, doc tag parsing |
//!
//! ### Dependency Injection
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Autowiring injector, invokable classification, cycle detection |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML/environment configuration |
//! | [`constants`] | Centralized configuration constants |
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod reflection;

// Re-export commonly used types
pub use di::{BoundExecutable, Executable, Injector, InspectFlags, Inspection, Resolver};
pub use error_ext::ErrorContext;
pub use reflection::{ClassDefinition, FunctionDefinition, MethodDefinition, TypeCatalog};
