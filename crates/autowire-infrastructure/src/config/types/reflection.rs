//! Reflection configuration types

use crate::constants::DEFAULT_REFLECTION_CACHING;
use serde::{Deserialize, Serialize};

/// Metadata provider selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflectionConfig {
    /// Memoize reflection results for the injector's lifetime
    pub caching: bool,

    /// Upper bound on memoized entries, unbounded when absent
    pub cache_capacity: Option<usize>,
}

impl Default for ReflectionConfig {
    fn default() -> Self {
        Self {
            caching: DEFAULT_REFLECTION_CACHING,
            cache_capacity: None,
        }
    }
}
