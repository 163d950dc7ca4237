//! Registry inspection
//!
//! Diagnostic snapshot of what the injector was told, for one name or for
//! everything.

use std::collections::BTreeMap;
use std::ops::{BitOr, BitOrAssign};

use autowire_domain::value_objects::{Arguments, Instance, Value, normalize_name};

use super::injector::Injector;

/// Selection of registries to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InspectFlags(u8);

impl InspectFlags {
    /// Per-type definitions and global parameter definitions
    pub const BINDINGS: Self = Self(1);
    /// Delegates
    pub const DELEGATES: Self = Self(1 << 1);
    /// Prepare hooks
    pub const PREPARES: Self = Self(1 << 2);
    /// Aliases
    pub const ALIASES: Self = Self(1 << 3);
    /// Shares
    pub const SHARES: Self = Self(1 << 4);
    /// Every registry
    pub const ALL: Self = Self(0b1_1111);

    /// Whether every bit of `other` is set
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Raw bit mask
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for InspectFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for InspectFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Shorthand for [`InspectFlags::BINDINGS`]
pub const I_BINDINGS: InspectFlags = InspectFlags::BINDINGS;
/// Shorthand for [`InspectFlags::DELEGATES`]
pub const I_DELEGATES: InspectFlags = InspectFlags::DELEGATES;
/// Shorthand for [`InspectFlags::PREPARES`]
pub const I_PREPARES: InspectFlags = InspectFlags::PREPARES;
/// Shorthand for [`InspectFlags::ALIASES`]
pub const I_ALIASES: InspectFlags = InspectFlags::ALIASES;
/// Shorthand for [`InspectFlags::SHARES`]
pub const I_SHARES: InspectFlags = InspectFlags::SHARES;
/// Shorthand for [`InspectFlags::ALL`]
pub const I_ALL: InspectFlags = InspectFlags::ALL;

/// Snapshot of the requested registries
///
/// A field is `None` when its flag was not requested. Type keys are
/// canonical lower-case names; parameter definitions keep their spelling.
#[derive(Debug, Clone, Default)]
pub struct Inspection {
    /// Per-type parameter overrides
    pub definitions: Option<BTreeMap<String, Arguments>>,
    /// Global parameter values
    pub param_definitions: Option<BTreeMap<String, Value>>,
    /// Registered factories
    pub delegates: Option<BTreeMap<String, Value>>,
    /// Number of prepare hooks per type or interface
    pub prepares: Option<BTreeMap<String, usize>>,
    /// Alias targets as spelled at registration
    pub aliases: Option<BTreeMap<String, String>>,
    /// Shared types with their instance, once built
    pub shares: Option<BTreeMap<String, Option<Instance>>>,
}

fn select<V: Clone>(
    entries: impl IntoIterator<Item = (String, V)>,
    key: Option<&str>,
) -> BTreeMap<String, V> {
    entries
        .into_iter()
        .filter(|(name, _)| key.is_none_or(|key| name == key))
        .collect()
}

impl Injector {
    /// Report registry contents for `name`, or for every name
    pub fn inspect(&self, name: Option<&str>, flags: InspectFlags) -> Inspection {
        let key = name.map(normalize_name);
        let key = key.as_deref();
        let mut inspection = Inspection::default();

        if flags.contains(InspectFlags::BINDINGS) {
            inspection.definitions = Some(select(self.definitions.clone(), key));
            inspection.param_definitions = Some(select(self.param_definitions.clone(), name));
        }
        if flags.contains(InspectFlags::DELEGATES) {
            inspection.delegates = Some(select(self.delegates.clone(), key));
        }
        if flags.contains(InspectFlags::PREPARES) {
            inspection.prepares = Some(select(self.prepares.counts(), key));
        }
        if flags.contains(InspectFlags::ALIASES) {
            let aliases = self
                .aliases
                .iter()
                .map(|(from, to)| (from.clone(), to.as_str().to_string()));
            inspection.aliases = Some(select(aliases, key));
        }
        if flags.contains(InspectFlags::SHARES) {
            inspection.shares = Some(select(self.shares.snapshot(), key));
        }

        inspection
    }
}
