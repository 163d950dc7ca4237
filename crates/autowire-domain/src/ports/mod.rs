//! Domain Port Interfaces
//!
//! Boundary contracts between the injector and its swappable collaborators.
//!
//! ## Organization
//!
//! - **reflector** - structural metadata provider and the raw type source behind it
//! - **doc_tags** - doc comment tag parser
//! - **cache** - backing store of the memoizing reflector

/// Reflection cache port
pub mod cache;
/// Doc comment tag parser port
pub mod doc_tags;
/// Metadata provider ports
pub mod reflector;

pub use cache::{CachedReflection, ReflectionCache};
pub use doc_tags::DocTagParser;
pub use reflector::{Reflector, TypeSource};
