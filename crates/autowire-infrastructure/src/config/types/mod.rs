//! Configuration types module

pub mod app;
pub mod logging;
pub mod reflection;

// Re-export main types
pub use app::*;
