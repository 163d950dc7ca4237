//! Argument provisioning
//!
//! Turns a parameter list plus the caller's arguments into the values a
//! constructor, method, function or closure is invoked with. Each
//! parameter takes the first value found in this order:
//!
//! 1. an argument bound to its name (`:name` raw value, `name` type to
//!    construct, `+name` invokable to execute)
//! 2. a positional argument: parameters with a resolved type claim the first
//!    object implementing it, the others consume what is left in order
//! 3. the per-type definition of the type being constructed
//! 4. for a resolved type, a recursively constructed instance, or the default
//!    value when the type cannot be constructed at all
//! 5. for an untyped parameter, a global parameter definition
//! 6. the default value, or null when the parameter accepts it

use std::borrow::Cow;

use autowire_domain::error::{Error, ReasonCode, Result};
use autowire_domain::value_objects::{
    ArgumentKey, Arguments, FunctionDescriptor, ParameterDescriptor, TypeHint, TypeName, Value,
};
use tracing::trace;

use super::chain::ResolutionChain;
use super::injector::Injector;
use crate::reflection::doc_hint::implemented_by_instance;

impl Injector {
    /// Resolve every parameter of `function`
    ///
    /// `definition` carries the per-type overrides of the type being
    /// constructed; it is never passed on to dependencies.
    pub(crate) fn provision_args(
        &self,
        function: &FunctionDescriptor,
        args: &Arguments,
        definition: Option<&Arguments>,
        chain: &mut ResolutionChain,
    ) -> Result<Vec<Value>> {
        let params = function.params();
        if params.is_empty() {
            return Ok(Vec::new());
        }

        let hint_args = self.hint_arguments(args);
        let hints = params
            .iter()
            .map(|param| {
                self.reflector
                    .param_type_hint(function, param, &hint_args)
            })
            .collect::<Result<Vec<TypeHint>>>()?;

        let mut slots: Vec<Option<Value>> = vec![None; params.len()];

        for (slot, param) in slots.iter_mut().zip(params) {
            if let Some((key, value)) = args.named(param.name()) {
                trace!(param = param.name(), "bound by name");
                *slot = Some(self.named_value(key, value, chain)?);
            }
        }

        self.claim_positionals(args, &hints, &mut slots);

        if let Some(definition) = definition {
            for (slot, param) in slots.iter_mut().zip(params) {
                if slot.is_some() {
                    continue;
                }
                if let Some((key, value)) = definition.named(param.name()) {
                    trace!(param = param.name(), "bound by definition");
                    *slot = Some(self.named_value(key, value, chain)?);
                } else if let Some((_, value)) = definition
                    .positional_values()
                    .find(|(position, _)| *position == param.position())
                {
                    trace!(param = param.name(), "bound by positional definition");
                    *slot = Some(value.clone());
                }
            }
        }

        let mut values = Vec::with_capacity(params.len());
        for ((slot, param), hint) in slots.into_iter().zip(params).zip(&hints) {
            let value = match slot {
                Some(value) => value,
                None => self.fallback_value(function, param, hint, chain)?,
            };
            values.push(value);
        }
        Ok(values)
    }

    /// Runtime arguments plus global parameter definitions, for hint matching
    fn hint_arguments<'a>(&self, args: &'a Arguments) -> Cow<'a, Arguments> {
        if self.param_definitions.is_empty() {
            return Cow::Borrowed(args);
        }
        let mut merged = args.clone();
        for (name, value) in &self.param_definitions {
            if args.named(name).is_none() {
                merged.insert_key(ArgumentKey::Raw(name.clone()), value.clone());
            }
        }
        Cow::Owned(merged)
    }

    /// Value of an argument bound to a parameter name
    fn named_value(
        &self,
        key: &ArgumentKey,
        value: &Value,
        chain: &mut ResolutionChain,
    ) -> Result<Value> {
        match (key, value) {
            (ArgumentKey::Class(_), Value::String(class)) => {
                self.resolve(class, &Arguments::new(), chain).map(Value::Object)
            }
            (ArgumentKey::Delegate(_), invokable) => {
                let executable = self.classify(invokable, chain)?;
                self.invoke(&executable, &Arguments::new(), chain)
            }
            (_, value) => Ok(value.clone()),
        }
    }

    /// Hand out positional arguments to parameters not bound by name
    fn claim_positionals(&self, args: &Arguments, hints: &[TypeHint], slots: &mut [Option<Value>]) {
        let mut ordered: Vec<(usize, &Value)> = args.positional_values().collect();
        if ordered.is_empty() {
            return;
        }
        ordered.sort_by_key(|(position, _)| *position);
        let mut positionals: Vec<Option<&Value>> =
            ordered.into_iter().map(|(_, value)| Some(value)).collect();

        for (slot, hint) in slots.iter_mut().zip(hints) {
            let Some(class) = hint.class() else {
                continue;
            };
            if slot.is_some() {
                continue;
            }
            if let Some(claimed) = positionals
                .iter_mut()
                .find(|candidate| self.is_instance_of(**candidate, class))
            {
                *slot = claimed.take().cloned();
            }
        }

        let mut leftovers = positionals.iter_mut().filter(|candidate| candidate.is_some());
        for (slot, hint) in slots.iter_mut().zip(hints) {
            if slot.is_some() || hint.class().is_some() {
                continue;
            }
            match leftovers.next() {
                Some(value) => *slot = value.take().cloned(),
                None => break,
            }
        }
    }

    fn is_instance_of(&self, candidate: Option<&Value>, class: &TypeName) -> bool {
        candidate
            .and_then(Value::as_object)
            .is_some_and(|object| implemented_by_instance(self.reflector.as_ref(), object).contains(class))
    }

    /// Value for a parameter no argument or definition covers
    fn fallback_value(
        &self,
        function: &FunctionDescriptor,
        param: &ParameterDescriptor,
        hint: &TypeHint,
        chain: &mut ResolutionChain,
    ) -> Result<Value> {
        if let TypeHint::Class(class) = hint {
            if let Some(default) = param.default_value() {
                if !self.is_resolvable(class) {
                    trace!(param = param.name(), class = %class, "unresolvable type, using default");
                    return Ok(default.clone());
                }
            }
            trace!(param = param.name(), class = %class, "resolving dependency");
            return self
                .resolve(class.as_str(), &Arguments::new(), chain)
                .map(Value::Object);
        }

        if let Some(value) = self.param_definitions.get(param.name()) {
            trace!(param = param.name(), "bound by parameter definition");
            return Ok(value.clone());
        }
        if let Some(default) = param.default_value() {
            return Ok(default.clone());
        }
        if param.allows_null() {
            return Ok(Value::Null);
        }

        Err(Error::resolution(
            ReasonCode::UndefinedParameter,
            format!(
                "No definition available to provision typeless parameter ${} at position {} in {}()",
                param.name(),
                param.position(),
                function.qualified_name()
            ),
        ))
    }

    /// Whether `class` can be produced by alias, delegate, share or construction
    fn is_resolvable(&self, class: &TypeName) -> bool {
        let key = class.key();
        self.aliases.contains_key(key)
            || self.delegates.contains_key(key)
            || self.shares.contains(key)
            || self
                .reflector
                .class_of(class.as_str())
                .is_ok_and(|descriptor| descriptor.is_instantiable())
    }
}
