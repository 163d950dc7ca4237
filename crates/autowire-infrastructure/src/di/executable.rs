//! Executable classification
//!
//! Every invokable shape is classified once into an [`Executable`]:
//!
//! | Given | Classified as |
//! |-------|---------------|
//! | `"function_name"` | [`Executable::FreeFunction`] |
//! | `"Type::method"`, `"Type::parent::method"` | static or instance method |
//! | `["Type", "method"]`, `[instance, "method"]` | static or instance method |
//! | closure | [`Executable::Closure`] |
//! | instance or type name exposing `__invoke` | [`Executable::CallableObject`] |
//!
//! Methods named through a type name follow its alias. Instance methods get
//! their receiver from the injector, so shares and delegates apply, and run
//! the method of the receiver's own type.

use std::sync::Arc;

use autowire_domain::constants::{INVOKE_METHOD, METHOD_SEPARATOR, PARENT_PREFIX};
use autowire_domain::error::{Error, ReasonCode, Result};
use autowire_domain::value_objects::{
    Arguments, Closure, FunctionBody, FunctionDescriptor, Instance, TypeName, Value,
};
use tracing::trace;

use super::chain::ResolutionChain;
use super::injector::Injector;
use crate::constants::CLOSURE_NAME;

/// A classified invokable, ready to be provisioned and called
#[derive(Debug, Clone)]
pub enum Executable {
    /// Free function
    FreeFunction(Arc<FunctionDescriptor>),
    /// Static method
    StaticMethod(Arc<FunctionDescriptor>),
    /// Method bound to a receiver
    InstanceMethod {
        /// Receiver of the call
        receiver: Instance,
        /// Method to run
        method: Arc<FunctionDescriptor>,
    },
    /// Closure value
    Closure(Closure),
    /// Object exposing a call operator
    CallableObject {
        /// Receiver of the call
        receiver: Instance,
        /// Its call operator
        method: Arc<FunctionDescriptor>,
    },
}

impl Executable {
    /// Descriptor whose parameters are provisioned before the call
    pub fn function(&self) -> Arc<FunctionDescriptor> {
        match self {
            Self::FreeFunction(function) | Self::StaticMethod(function) => Arc::clone(function),
            Self::InstanceMethod { method, .. } | Self::CallableObject { method, .. } => {
                Arc::clone(method)
            }
            Self::Closure(closure) => Arc::new(
                FunctionDescriptor::new(CLOSURE_NAME, FunctionBody::Function(closure.body()))
                    .with_params(closure.shared_params()),
            ),
        }
    }

    /// Receiver of the call, if any
    pub fn receiver(&self) -> Option<&Instance> {
        match self {
            Self::InstanceMethod { receiver, .. } | Self::CallableObject { receiver, .. } => {
                Some(receiver)
            }
            _ => None,
        }
    }
}

/// An [`Executable`] bound to the injector that provisions its arguments
#[derive(Debug)]
pub struct BoundExecutable<'i> {
    injector: &'i Injector,
    executable: Executable,
}

impl<'i> BoundExecutable<'i> {
    pub(crate) fn new(injector: &'i Injector, executable: Executable) -> Self {
        Self {
            injector,
            executable,
        }
    }

    /// The classified invokable
    pub fn executable(&self) -> &Executable {
        &self.executable
    }

    /// Call without explicit arguments
    pub fn call(&self) -> Result<Value> {
        self.call_with(&Arguments::new())
    }

    /// Call, resolving parameters `args` does not cover
    pub fn call_with(&self, args: &Arguments) -> Result<Value> {
        self.injector
            .invoke(&self.executable, args, &mut ResolutionChain::new())
    }
}

/// Render an invokable the way it was given, for diagnostics
pub fn describe_invokable(invokable: &Value) -> String {
    match invokable {
        Value::String(name) => name.clone(),
        Value::Array(items) => {
            let rendered: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Value::String(s) => format!("'{s}'"),
                    other => other.type_label(),
                })
                .collect();
            format!("[{}]", rendered.join(", "))
        }
        other => other.type_label(),
    }
}

fn invokable_not_found(invokable: &Value) -> Error {
    Error::resolution(
        ReasonCode::InvokableNotFound,
        format!(
            "Invalid invokable: callable or provisional string required, {} given",
            describe_invokable(invokable)
        ),
    )
}

impl Injector {
    /// Classify an invokable, constructing its receiver when needed
    pub(crate) fn classify(
        &self,
        invokable: &Value,
        chain: &mut ResolutionChain,
    ) -> Result<Executable> {
        match invokable {
            Value::Closure(closure) => Ok(Executable::Closure(closure.clone())),
            Value::Object(object) => self.callable_object(object.clone(), invokable),
            Value::String(name) => match name.split_once(METHOD_SEPARATOR) {
                Some((class, method)) => {
                    self.classify_method(&Value::String(class.to_string()), method, invokable, chain)
                }
                None => self.classify_name(name, invokable, chain),
            },
            Value::Array(items) => match items.as_slice() {
                [target, Value::String(method)] => {
                    self.classify_method(target, method, invokable, chain)
                }
                _ => Err(invokable_not_found(invokable)),
            },
            _ => Err(invokable_not_found(invokable)),
        }
    }

    /// Whether `invokable` could be classified, without constructing anything
    pub(crate) fn is_invokable(&self, invokable: &Value) -> bool {
        match invokable {
            Value::Closure(_) => true,
            Value::Object(object) => self.has_call_operator(object.class().as_str()),
            Value::String(name) => match name.split_once(METHOD_SEPARATOR) {
                Some((class, method)) => self.locate_method(class, method).is_ok(),
                None => {
                    self.reflector.function_of(name).is_ok() || self.has_call_operator(name)
                }
            },
            Value::Array(items) => match items.as_slice() {
                [Value::String(class), Value::String(method)] => {
                    self.locate_method(class, method).is_ok()
                }
                [Value::Object(object), Value::String(method)] => {
                    self.locate_method(object.class().as_str(), method).is_ok()
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Run a classified invokable with provisioned arguments
    pub(crate) fn invoke(
        &self,
        executable: &Executable,
        args: &Arguments,
        chain: &mut ResolutionChain,
    ) -> Result<Value> {
        let function = executable.function();
        trace!(invokable = %function.qualified_name(), "invoking");
        let values = self.provision_args(&function, args, None, chain)?;
        function.call(executable.receiver(), values)
    }

    fn classify_name(
        &self,
        name: &str,
        invokable: &Value,
        chain: &mut ResolutionChain,
    ) -> Result<Executable> {
        if let Ok(function) = self.reflector.function_of(name) {
            return Ok(Executable::FreeFunction(function));
        }
        if self.has_call_operator(name) {
            let receiver = self.resolve(name, &Arguments::new(), chain)?;
            return self.callable_object(receiver, invokable);
        }
        Err(invokable_not_found(invokable))
    }

    fn classify_method(
        &self,
        target: &Value,
        method: &str,
        invokable: &Value,
        chain: &mut ResolutionChain,
    ) -> Result<Executable> {
        let object = match target {
            Value::String(class) => {
                return self.classify_class_method(class, method, invokable, chain);
            }
            Value::Object(object) => object,
            _ => return Err(invokable_not_found(invokable)),
        };

        let function = self
            .locate_method(object.class().as_str(), method)
            .map_err(|_| invokable_not_found(invokable))?;
        if function.is_static() {
            return Ok(Executable::StaticMethod(function));
        }
        Ok(Executable::InstanceMethod {
            receiver: object.clone(),
            method: function,
        })
    }

    /// `Type::method` with the alias of `Type` applied
    ///
    /// Instance methods are looked up again on the receiver actually built,
    /// which a delegate or an alias may have made a subtype.
    fn classify_class_method(
        &self,
        class: &str,
        method: &str,
        invokable: &Value,
        chain: &mut ResolutionChain,
    ) -> Result<Executable> {
        let (class, method) = match method.strip_prefix(PARENT_PREFIX) {
            Some(inherited) => (
                self.parent_of(class)
                    .map_err(|_| invokable_not_found(invokable))?,
                inherited,
            ),
            None => (TypeName::new(class), method),
        };
        let target = self
            .aliases
            .get(class.key())
            .cloned()
            .unwrap_or_else(|| class.clone());

        let function = self
            .reflector
            .method_of(target.as_str(), method)
            .map_err(|_| invokable_not_found(invokable))?;
        if function.is_static() {
            return Ok(Executable::StaticMethod(function));
        }

        let receiver = self.resolve(class.as_str(), &Arguments::new(), chain)?;
        let function = if receiver.class().key() == target.key() {
            function
        } else {
            self.reflector
                .method_of(receiver.class().as_str(), method)
                .map_err(|_| invokable_not_found(invokable))?
        };
        Ok(Executable::InstanceMethod {
            receiver,
            method: function,
        })
    }

    fn callable_object(&self, receiver: Instance, invokable: &Value) -> Result<Executable> {
        let method = self
            .reflector
            .method_of(receiver.class().as_str(), INVOKE_METHOD)
            .map_err(|_| invokable_not_found(invokable))?;
        Ok(Executable::CallableObject { receiver, method })
    }

    /// Method lookup honouring the `parent::` prefix
    fn locate_method(&self, class: &str, method: &str) -> Result<Arc<FunctionDescriptor>> {
        match method.strip_prefix(PARENT_PREFIX) {
            Some(inherited) => self.reflector.method_of(self.parent_of(class)?.as_str(), inherited),
            None => self.reflector.method_of(class, method),
        }
    }

    fn parent_of(&self, class: &str) -> Result<TypeName> {
        self.reflector.class_of(class)?.parent().cloned().ok_or_else(|| {
            Error::resolution(
                ReasonCode::InvokableNotFound,
                format!("{class} has no parent class"),
            )
        })
    }

    fn has_call_operator(&self, class: &str) -> bool {
        self.reflector
            .class_of(class)
            .is_ok_and(|descriptor| descriptor.is_callable_object())
    }
}
