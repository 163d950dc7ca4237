//! Canonical type names
//!
//! Type names compare case-insensitively and ignore a leading namespace
//! separator, so `\App\Foo`, `app\foo` and `App\Foo` all denote one type.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::{NAMESPACE_SEPARATOR, SCALAR_TYPE_NAMES};

/// Lower-cased, separator-trimmed form used as a registry key
pub fn normalize_name(name: &str) -> String {
    name.trim_start_matches(NAMESPACE_SEPARATOR).to_lowercase()
}

/// Whether the name is one of the built-in scalar or array type names
pub fn is_scalar_type(name: &str) -> bool {
    let name = normalize_name(name);
    SCALAR_TYPE_NAMES.contains(&name.as_str())
}

/// A type name remembering how it was spelled
///
/// Equality, ordering and hashing use the canonical key only.
#[derive(Debug, Clone)]
pub struct TypeName {
    spelled: String,
    key: String,
}

impl TypeName {
    /// Create a type name from any spelling
    pub fn new(name: impl AsRef<str>) -> Self {
        let spelled = name
            .as_ref()
            .trim_start_matches(NAMESPACE_SEPARATOR)
            .to_string();
        let key = spelled.to_lowercase();
        Self { spelled, key }
    }

    /// Name as first spelled, without a leading separator
    pub fn as_str(&self) -> &str {
        &self.spelled
    }

    /// Canonical registry key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Namespace part of the name, empty for global names
    pub fn namespace(&self) -> &str {
        self.spelled
            .rfind(NAMESPACE_SEPARATOR)
            .map_or("", |idx| &self.spelled[..idx])
    }

    /// Unqualified part of the name
    pub fn short_name(&self) -> &str {
        self.spelled
            .rfind(NAMESPACE_SEPARATOR)
            .map_or(self.spelled.as_str(), |idx| &self.spelled[idx + 1..])
    }

    /// Whether the name denotes a scalar or array type
    pub fn is_scalar(&self) -> bool {
        SCALAR_TYPE_NAMES.contains(&self.key.as_str())
    }
}

impl PartialEq for TypeName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for TypeName {}

impl Hash for TypeName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for TypeName {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeName {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

impl Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelled)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&String> for TypeName {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}
