//! Resolution Chain
//!
//! Canonical names of the types under construction in one top-level
//! `make`/`execute` call tree. Entering a name hands back a guard that
//! removes it again when dropped, so the chain unwinds on success, on error
//! and on early return alike.

use std::ops::{Deref, DerefMut};

use autowire_domain::error::{Error, ReasonCode, Result};

/// Types currently being constructed, outermost first
#[derive(Debug, Default)]
pub struct ResolutionChain {
    names: Vec<String>,
}

impl ResolutionChain {
    /// Empty chain for a new top-level call
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `key`, failing when it is already under construction
    pub fn enter(&mut self, key: &str) -> Result<ChainGuard<'_>> {
        if self.contains(key) {
            let mut cycle = self.names.clone();
            cycle.push(key.to_string());
            return Err(Error::resolution_in_chain(
                ReasonCode::CyclicDependency,
                format!(
                    "Detected a cyclic dependency while provisioning {key}: {}",
                    cycle.join(" -> ")
                ),
                cycle,
            ));
        }
        self.names.push(key.to_string());
        Ok(ChainGuard { chain: self })
    }

    /// Whether `key` is under construction
    pub fn contains(&self, key: &str) -> bool {
        self.names.iter().any(|name| name == key)
    }

    /// Names in encounter order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of nested constructions
    pub fn depth(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing is under construction
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Scoped entry of a [`ResolutionChain`]
///
/// Dereferences to the chain so nested resolutions can enter further names.
pub struct ChainGuard<'a> {
    chain: &'a mut ResolutionChain,
}

impl Deref for ChainGuard<'_> {
    type Target = ResolutionChain;

    fn deref(&self) -> &Self::Target {
        self.chain
    }
}

impl DerefMut for ChainGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.chain
    }
}

impl Drop for ChainGuard<'_> {
    fn drop(&mut self) {
        self.chain.names.pop();
    }
}
