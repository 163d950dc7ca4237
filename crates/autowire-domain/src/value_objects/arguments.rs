//! Argument maps
//!
//! An ordered sequence of `(key, value)` pairs used both for the runtime
//! arguments of `make`/`execute` and for per-type `define` overrides.
//!
//! | Key form | Meaning |
//! |----------|---------|
//! | `0`, `1`, … | positional value |
//! | `:name` | literal value bound to parameter `name` |
//! | `+name` | result of an invokable bound to parameter `name` |
//! | `name` | type name constructed for parameter `name` |

use super::value::Value;
use crate::constants::{DELEGATE_MARKER, RAW_MARKER};

/// How an argument binds to a parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentKey {
    /// Purely positional
    Position(usize),
    /// Literal value for the named parameter
    Raw(String),
    /// Type name to construct for the named parameter
    Class(String),
    /// Invokable whose result feeds the named parameter
    Delegate(String),
}

impl ArgumentKey {
    /// Parse a string key
    ///
    /// Numeric keys are positional; `:` and `+` prefixes mark raw and
    /// delegate bindings; any other key is a type-name binding.
    pub fn parse(key: &str) -> Self {
        if let Ok(position) = key.parse::<usize>() {
            return Self::Position(position);
        }
        if let Some(name) = key.strip_prefix(RAW_MARKER) {
            return Self::Raw(name.to_string());
        }
        if let Some(name) = key.strip_prefix(DELEGATE_MARKER) {
            return Self::Delegate(name.to_string());
        }
        Self::Class(key.to_string())
    }

    /// Whether the key carries no name
    pub fn is_positional(&self) -> bool {
        matches!(self, Self::Position(_))
    }

    /// Parameter name the key binds to, without its marker
    pub fn parameter_name(&self) -> Option<&str> {
        match self {
            Self::Position(_) => None,
            Self::Raw(name) | Self::Class(name) | Self::Delegate(name) => Some(name),
        }
    }

    /// Whether the key is positional or names `param`
    pub fn targets(&self, param: &str) -> bool {
        self.parameter_name().is_none_or(|name| name == param)
    }
}

/// Ordered argument map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    entries: Vec<(ArgumentKey, Value)>,
    next_position: usize,
}

impl Arguments {
    /// Empty argument map
    pub fn new() -> Self {
        Self::default()
    }

    /// Map holding only positional values
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values
            .into_iter()
            .fold(Self::new(), |args, value| args.push(value))
    }

    /// Append a positional value
    #[must_use]
    pub fn push(mut self, value: impl Into<Value>) -> Self {
        let position = self.next_position;
        self.insert_key(ArgumentKey::Position(position), value.into());
        self
    }

    /// Bind a literal value to a parameter name
    #[must_use]
    pub fn raw(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert_key(ArgumentKey::Raw(name.into()), value.into());
        self
    }

    /// Bind a type name to construct for a parameter name
    #[must_use]
    pub fn class(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.insert_key(
            ArgumentKey::Class(name.into()),
            Value::String(type_name.into()),
        );
        self
    }

    /// Bind the result of an invokable to a parameter name
    #[must_use]
    pub fn delegate(mut self, name: impl Into<String>, invokable: impl Into<Value>) -> Self {
        self.insert_key(ArgumentKey::Delegate(name.into()), invokable.into());
        self
    }

    /// Insert using a string key, see [`ArgumentKey::parse`]
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert_key(ArgumentKey::parse(key), value.into());
        self
    }

    /// Insert or replace the entry for `key`, keeping first-insertion order
    pub fn insert_key(&mut self, key: ArgumentKey, value: Value) {
        if let ArgumentKey::Position(position) = key {
            self.next_position = self.next_position.max(position + 1);
        }
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[(ArgumentKey, Value)] {
        &self.entries
    }

    /// Positional entries as `(position, value)` in insertion order
    pub fn positional_values(&self) -> impl Iterator<Item = (usize, &Value)> {
        self.entries.iter().filter_map(|(key, value)| match key {
            ArgumentKey::Position(position) => Some((*position, value)),
            _ => None,
        })
    }

    /// Entry bound by name to `param` through any named key form
    pub fn named(&self, param: &str) -> Option<(&ArgumentKey, &Value)> {
        self.entries
            .iter()
            .find(|(key, _)| key.parameter_name() == Some(param))
            .map(|(key, value)| (key, value))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
