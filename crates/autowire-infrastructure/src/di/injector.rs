//! Injector
//!
//! Recursive, autowiring object-graph builder. The injector owns its
//! registries (aliases, shares, delegates, per-type definitions, global
//! parameter definitions and prepare hooks) and asks a
//! [`Reflector`] for the shape of every type it builds.
//!
//! ## Resolving a type
//!
//! 1. The requested name enters the resolution chain; finding it there
//!    already is a cyclic dependency.
//! 2. A shared instance stored under the requested name is returned as is.
//! 3. A delegate registered for the requested name builds the instance.
//! 4. Otherwise the alias, if any, is substituted once. A shared instance or
//!    a delegate of the substituted type short-circuits construction.
//! 5. The type is constructed, its constructor arguments provisioned (see
//!    [`provision`](super::provision)).
//! 6. Prepare hooks of every type the instance implements run in
//!    registration order and may replace it.
//! 7. A type marked shared keeps the final instance.
//!
//! Registration takes `&mut self`; resolution only needs `&self`. Prepare
//! hooks resolve further types through a [`Resolver`] that carries the
//! ongoing chain, so a hook reaching back to its own type is a cycle.
//! Sharing one injector between threads that resolve concurrently may build
//! a shared type twice; callers needing that must synchronise themselves.
//!
//! ## Example
//!
//! ```ignore
//! let mut injector = Injector::new(Arc::new(catalog));
//! injector
//!     .alias("App\\Mailer", "App\\SmtpMailer")?
//!     .share("App\\Mailer")?
//!     .define_param("host", "smtp.example.org");
//!
//! let mailer = injector.make("App\\Mailer")?;
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use autowire_domain::error::{Error, ReasonCode, Result};
use autowire_domain::ports::{Reflector, TypeSource};
use autowire_domain::value_objects::{
    Arguments, ClassKind, Instance, TypeName, Value, normalize_name,
};
use tracing::{debug, trace, warn};

use super::chain::ResolutionChain;
use super::executable::{BoundExecutable, describe_invokable};
use super::registries::{PrepareHook, PrepareRegistry, ShareRegistry};
use super::resolver::Resolver;
use crate::config::ReflectionConfig;
use crate::reflection::doc_hint::implemented_by_instance;
use crate::reflection::{CachingReflector, StandardReflector, reflector_for};

/// Autowiring injector
pub struct Injector {
    pub(super) reflector: Arc<dyn Reflector>,
    pub(super) aliases: BTreeMap<String, TypeName>,
    pub(super) shares: ShareRegistry,
    pub(super) delegates: BTreeMap<String, Value>,
    pub(super) definitions: BTreeMap<String, Arguments>,
    pub(super) param_definitions: BTreeMap<String, Value>,
    pub(super) prepares: PrepareRegistry,
}

// Construction
impl Injector {
    /// Injector reading `source` through a memoizing reflector
    pub fn new(source: Arc<dyn TypeSource>) -> Self {
        Self::with_reflector(Arc::new(CachingReflector::new(StandardReflector::new(
            source,
        ))))
    }

    /// Injector using a specific metadata provider
    pub fn with_reflector(reflector: Arc<dyn Reflector>) -> Self {
        Self {
            reflector,
            aliases: BTreeMap::new(),
            shares: ShareRegistry::default(),
            delegates: BTreeMap::new(),
            definitions: BTreeMap::new(),
            param_definitions: BTreeMap::new(),
            prepares: PrepareRegistry::default(),
        }
    }

    /// Injector whose metadata provider is selected by `config`
    pub fn from_config(source: Arc<dyn TypeSource>, config: &ReflectionConfig) -> Self {
        debug!(caching = config.caching, "building injector from configuration");
        Self::with_reflector(reflector_for(source, config))
    }

    /// Metadata provider in use
    pub fn reflector(&self) -> &Arc<dyn Reflector> {
        &self.reflector
    }
}

// Registration
impl Injector {
    /// Resolve `original` as `alias` from now on
    ///
    /// A pending share of `original` moves to `alias`. Fails when `original`
    /// already has a shared instance or either name is empty.
    pub fn alias(&mut self, original: &str, alias: &str) -> Result<&mut Self> {
        if original.trim().is_empty() || alias.trim().is_empty() {
            return Err(Error::configuration(
                ReasonCode::NonEmptyStringAlias,
                "Invalid alias: non-empty string required at arguments 1 and 2",
            ));
        }

        let key = normalize_name(original);
        if self.shares.instance(&key).is_some() {
            return Err(Error::configuration(
                ReasonCode::SharedCannotAlias,
                format!(
                    "Cannot alias class {} to {alias} because it is currently shared",
                    original.trim_start_matches('\\')
                ),
            ));
        }

        let target = TypeName::new(alias);
        if self.shares.remove(&key).is_some() {
            self.shares.mark(target.key());
        }
        debug!(original = %key, alias = %target, "alias registered");
        self.aliases.insert(key, target);
        Ok(self)
    }

    /// Share a type by name, or a ready instance
    ///
    /// Named types are shared under their alias target, if any, and keep the
    /// first instance built. An instance may not be shared under a name
    /// aliased to another type.
    pub fn share(&mut self, target: impl Into<Value>) -> Result<&mut Self> {
        match target.into() {
            Value::String(name) if !name.trim().is_empty() => {
                let key = self.alias_target_key(&name);
                debug!(class = %key, "share registered");
                self.shares.mark(&key);
                Ok(self)
            }
            Value::Object(instance) => self.share_instance(instance),
            other => Err(Error::configuration(
                ReasonCode::InvalidShareArgument,
                format!(
                    "Injector::share expects a class name string or an object, {} given",
                    other.type_label()
                ),
            )),
        }
    }

    /// Build `name` through `factory` instead of its constructor
    ///
    /// The factory is any invokable; its own parameters are provisioned like
    /// constructor parameters.
    pub fn delegate(&mut self, name: &str, factory: impl Into<Value>) -> Result<&mut Self> {
        let factory = factory.into();
        if !self.is_invokable(&factory) {
            return Err(Error::configuration(
                ReasonCode::DelegateArgumentInvalid,
                format!(
                    "Injector::delegate expects a valid callable or executable class::method string at argument 2 for {name}, {} given",
                    describe_invokable(&factory)
                ),
            ));
        }
        let key = normalize_name(name);
        debug!(class = %key, factory = %describe_invokable(&factory), "delegate registered");
        self.delegates.insert(key, factory);
        Ok(self)
    }

    /// Override constructor arguments of `name`, and of nothing it depends on
    pub fn define(&mut self, name: &str, args: Arguments) -> &mut Self {
        let key = self.alias_target_key(name);
        debug!(class = %key, entries = args.len(), "definition registered");
        self.definitions.insert(key, args);
        self
    }

    /// Value for every untyped parameter called `name`
    pub fn define_param(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        debug!(param = name, "parameter definition registered");
        self.param_definitions.insert(name.to_string(), value.into());
        self
    }

    /// Run `hook` on every instance implementing `name` once it is built
    pub fn prepare<F>(&mut self, name: &str, hook: F) -> &mut Self
    where
        F: Fn(&Instance, &mut Resolver<'_>) -> Result<Option<Instance>> + Send + Sync + 'static,
    {
        let hook: PrepareHook = Arc::new(hook);
        debug!(class = %normalize_name(name), "prepare hook registered");
        self.prepares.add(TypeName::new(name), hook);
        self
    }

    fn share_instance(&mut self, instance: Instance) -> Result<&mut Self> {
        let key = instance.class().key().to_string();
        if let Some(target) = self.aliases.get(&key) {
            if target.key() != key {
                return Err(Error::configuration(
                    ReasonCode::AliasedCannotShare,
                    format!(
                        "Cannot share class {} because it is currently aliased to {target}",
                        instance.class()
                    ),
                ));
            }
        }
        if let Some(previous) = self.shares.store(&key, instance.clone()) {
            if !previous.ptr_eq(&instance) {
                warn!(class = %key, "replacing previously shared instance");
            }
        }
        debug!(class = %key, "instance shared");
        Ok(self)
    }

    fn alias_target_key(&self, name: &str) -> String {
        let key = normalize_name(name);
        match self.aliases.get(&key) {
            Some(target) => target.key().to_string(),
            None => key,
        }
    }
}

// Resolution
impl Injector {
    /// Build an instance of `name`
    pub fn make(&self, name: &str) -> Result<Instance> {
        self.make_with(name, &Arguments::new())
    }

    /// Build an instance of `name` with explicit constructor arguments
    pub fn make_with(&self, name: &str, args: &Arguments) -> Result<Instance> {
        debug!(class = name, args = args.len(), "make");
        self.resolve(name, args, &mut ResolutionChain::new())
    }

    /// Call an invokable, resolving its parameters
    pub fn execute(&self, invokable: impl Into<Value>) -> Result<Value> {
        self.execute_with(invokable, &Arguments::new())
    }

    /// Call an invokable with explicit arguments
    pub fn execute_with(&self, invokable: impl Into<Value>, args: &Arguments) -> Result<Value> {
        let invokable = invokable.into();
        let mut chain = ResolutionChain::new();
        let executable = self.classify(&invokable, &mut chain)?;
        self.invoke(&executable, args, &mut chain)
    }

    /// Classify an invokable without calling it
    pub fn build_executable(&self, invokable: impl Into<Value>) -> Result<BoundExecutable<'_>> {
        let invokable = invokable.into();
        let executable = self.classify(&invokable, &mut ResolutionChain::new())?;
        Ok(BoundExecutable::new(self, executable))
    }

    /// Resolve `name` inside an ongoing call tree
    pub(crate) fn resolve(
        &self,
        name: &str,
        args: &Arguments,
        chain: &mut ResolutionChain,
    ) -> Result<Instance> {
        let requested = TypeName::new(name);
        let mut guard = chain.enter(requested.key())?;
        let resolved = self.resolve_entered(&requested, args, &mut guard);
        resolved.map_err(|err| err.with_chain(guard.names()))
    }

    fn resolve_entered(
        &self,
        requested: &TypeName,
        args: &Arguments,
        chain: &mut ResolutionChain,
    ) -> Result<Instance> {
        if let Some(instance) = self.shares.instance(requested.key()) {
            trace!(class = %requested, "returning shared instance");
            return Ok(instance);
        }
        if let Some(factory) = self.delegates.get(requested.key()) {
            let instance = self.make_with_delegate(requested, factory, args, chain)?;
            return self.finish(requested, instance, chain);
        }

        let target = self
            .aliases
            .get(requested.key())
            .cloned()
            .unwrap_or_else(|| requested.clone());
        if target != *requested {
            trace!(class = %requested, alias = %target, "alias applied");
            if let Some(instance) = self.shares.instance(target.key()) {
                return Ok(instance);
            }
            if let Some(factory) = self.delegates.get(target.key()) {
                let instance = self.make_with_delegate(&target, factory, args, chain)?;
                return self.finish(&target, instance, chain);
            }
        }

        let instance = self.construct(&target, args, chain)?;
        self.finish(&target, instance, chain)
    }

    fn construct(
        &self,
        class: &TypeName,
        args: &Arguments,
        chain: &mut ResolutionChain,
    ) -> Result<Instance> {
        let descriptor = self.reflector.class_of(class.as_str())?;
        if !descriptor.is_instantiable() {
            let kind = match descriptor.kind() {
                ClassKind::Interface => "interface",
                _ => "abstract class",
            };
            return Err(Error::resolution(
                ReasonCode::NeedsDefinition,
                format!(
                    "Injection definition required for {kind} {}",
                    descriptor.name()
                ),
            ));
        }

        let instance = Instance::new(descriptor.name().clone());
        let Some(constructor) = descriptor.constructor() else {
            return Ok(instance);
        };
        if !constructor.is_public() {
            return Err(Error::resolution(
                ReasonCode::NonPublicConstructor,
                format!(
                    "Cannot instantiate protected/private constructor in class {}",
                    descriptor.name()
                ),
            ));
        }

        let definition = self.definitions.get(descriptor.name().key());
        let values = self.provision_args(constructor, args, definition, chain)?;
        constructor.construct(&instance, values)?;
        Ok(instance)
    }

    fn make_with_delegate(
        &self,
        class: &TypeName,
        factory: &Value,
        args: &Arguments,
        chain: &mut ResolutionChain,
    ) -> Result<Instance> {
        trace!(class = %class, "delegating construction");
        let executable = self.classify(factory, chain)?;
        match self.invoke(&executable, args, chain)? {
            Value::Object(instance)
                if implemented_by_instance(self.reflector.as_ref(), &instance).contains(class) =>
            {
                Ok(instance)
            }
            other => Err(Error::resolution(
                ReasonCode::MakingFailed,
                format!(
                    "Making {class} did not result in an instance of it, {} returned",
                    other.type_label()
                ),
            )),
        }
    }

    /// Run prepare hooks, then keep the result when the type is shared
    fn finish(
        &self,
        class: &TypeName,
        instance: Instance,
        chain: &mut ResolutionChain,
    ) -> Result<Instance> {
        let instance = self.prepare_instance(instance, chain)?;
        if self.shares.fill_if_marked(class.key(), &instance) {
            trace!(class = %class, "shared instance stored");
        }
        Ok(instance)
    }

    fn prepare_instance(&self, instance: Instance, chain: &mut ResolutionChain) -> Result<Instance> {
        if self.prepares.is_empty() {
            return Ok(instance);
        }
        let implemented = implemented_by_instance(self.reflector.as_ref(), &instance);
        let mut resolver = Resolver::new(self, chain);
        let mut current = instance;
        for hook in self.prepares.matching(&implemented) {
            if let Some(replacement) = hook(&current, &mut resolver)? {
                current = replacement;
            }
        }
        Ok(current)
    }
}

impl fmt::Debug for Injector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Injector")
            .field("aliases", &self.aliases)
            .field("shares", &self.shares)
            .field("delegates", &self.delegates.keys().collect::<Vec<_>>())
            .field("definitions", &self.definitions.keys().collect::<Vec<_>>())
            .field(
                "param_definitions",
                &self.param_definitions.keys().collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
