//! Reflection
//!
//! Structural metadata for the injector: the [`TypeCatalog`] declaring
//! types, the direct and memoizing [`Reflector`](autowire_domain::ports::Reflector)
//! implementations over it, the doc comment tag parser and the in-memory
//! reflection cache.
//!
//! | Component | Role |
//! |-----------|------|
//! | [`TypeCatalog`] | Declared classes, interfaces and functions |
//! | [`StandardReflector`] | Reads the catalog on every call |
//! | [`CachingReflector`] | Memoizes the standard reflector |
//! | [`RegexDocTagParser`] | Extracts `@param` tags |
//! | [`DashMapReflectionCache`] | Backing store of the caching reflector |

pub mod cache;
pub mod caching;
pub mod catalog;
pub mod doc_hint;
pub mod doc_parser;
pub mod standard;

use std::sync::Arc;

use autowire_domain::ports::{Reflector, TypeSource};

use crate::config::ReflectionConfig;

pub use cache::DashMapReflectionCache;
pub use caching::CachingReflector;
pub use catalog::{ClassDefinition, FunctionDefinition, MethodDefinition, TypeCatalog};
pub use doc_parser::RegexDocTagParser;
pub use standard::StandardReflector;

/// Build the reflector selected by `config` over `source`
pub fn reflector_for(source: Arc<dyn TypeSource>, config: &ReflectionConfig) -> Arc<dyn Reflector> {
    let standard = StandardReflector::new(source);
    if !config.caching {
        return Arc::new(standard);
    }
    let cache = config
        .cache_capacity
        .map_or_else(DashMapReflectionCache::new, DashMapReflectionCache::with_capacity);
    Arc::new(CachingReflector::with_cache(standard, Arc::new(cache)))
}
