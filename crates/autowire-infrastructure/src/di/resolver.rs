//! Resolver handle for prepare hooks
//!
//! Hooks run while their instance is still under construction. Resolving
//! through the [`Resolver`] keeps the ongoing resolution chain, so a hook
//! building a type that depends back on the one being prepared fails with a
//! cyclic dependency instead of recursing.

use autowire_domain::error::Result;
use autowire_domain::value_objects::{Arguments, Instance, Value};

use super::chain::ResolutionChain;
use super::injector::Injector;

/// Injector access from inside an ongoing resolution
pub struct Resolver<'a> {
    injector: &'a Injector,
    chain: &'a mut ResolutionChain,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(injector: &'a Injector, chain: &'a mut ResolutionChain) -> Self {
        Self { injector, chain }
    }

    /// The injector doing the resolution
    pub fn injector(&self) -> &Injector {
        self.injector
    }

    /// Build an instance of `name`
    pub fn make(&mut self, name: &str) -> Result<Instance> {
        self.make_with(name, &Arguments::new())
    }

    /// Build an instance of `name` with explicit constructor arguments
    pub fn make_with(&mut self, name: &str, args: &Arguments) -> Result<Instance> {
        self.injector.resolve(name, args, self.chain)
    }

    /// Call an invokable, resolving its parameters
    pub fn execute(&mut self, invokable: impl Into<Value>) -> Result<Value> {
        self.execute_with(invokable, &Arguments::new())
    }

    /// Call an invokable with explicit arguments
    pub fn execute_with(&mut self, invokable: impl Into<Value>, args: &Arguments) -> Result<Value> {
        let invokable = invokable.into();
        let executable = self.injector.classify(&invokable, self.chain)?;
        self.injector.invoke(&executable, args, self.chain)
    }
}
