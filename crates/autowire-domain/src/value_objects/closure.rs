//! Callable values

use std::fmt;
use std::sync::Arc;

use super::descriptor::ParameterDescriptor;
use super::value::Value;
use crate::error::Result;

/// Body of a closure or free function
pub type ClosureBody = Arc<dyn Fn(Vec<Value>) -> Result<Value> + Send + Sync>;

/// A callable value with its own parameter list
///
/// Parameters are resolved by the injector exactly like constructor
/// parameters before the body runs.
#[derive(Clone)]
pub struct Closure {
    params: Arc<[ParameterDescriptor]>,
    body: ClosureBody,
}

impl Closure {
    /// Closure taking no parameters
    pub fn new(body: impl Fn(Vec<Value>) -> Result<Value> + Send + Sync + 'static) -> Self {
        Self::with_params(Vec::new(), body)
    }

    /// Closure with declared parameters
    pub fn with_params(
        params: Vec<ParameterDescriptor>,
        body: impl Fn(Vec<Value>) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            params: ParameterDescriptor::positioned(params),
            body: Arc::new(body),
        }
    }

    /// Declared parameters
    pub fn params(&self) -> &[ParameterDescriptor] {
        &self.params
    }

    /// Shared parameter list
    pub fn shared_params(&self) -> Arc<[ParameterDescriptor]> {
        Arc::clone(&self.params)
    }

    /// Shared body
    pub fn body(&self) -> ClosureBody {
        Arc::clone(&self.body)
    }

    /// Run the body with already resolved arguments
    pub fn call(&self, args: Vec<Value>) -> Result<Value> {
        (self.body)(args)
    }

    /// Whether both handles share a body
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
