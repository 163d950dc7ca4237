//! Configuration
//!
//! Layered settings (defaults, TOML file, environment) selecting the
//! metadata provider and the logging setup.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig, ReflectionConfig};
