//! Structural metadata descriptors
//!
//! Descriptors are immutable once built. Metadata providers hand them out
//! behind `Arc` so a caching provider can memoize them cheaply.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::closure::ClosureBody;
use super::instance::Instance;
use super::type_name::{TypeName, normalize_name};
use super::value::Value;
use crate::error::{Error, Result};

/// Body of a constructor: initialises a freshly allocated instance
pub type ConstructorBody = Arc<dyn Fn(&Instance, Vec<Value>) -> Result<()> + Send + Sync>;

/// Body of a method: receives the receiver (absent for static calls)
pub type MethodBody = Arc<dyn Fn(Option<&Instance>, Vec<Value>) -> Result<Value> + Send + Sync>;

/// Accessibility of a constructor or method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Callable from anywhere
    #[default]
    Public,
    /// Callable from the type and its descendants
    Protected,
    /// Callable from the type only
    Private,
}

/// What kind of type a class descriptor describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassKind {
    /// Instantiable type
    #[default]
    Concrete,
    /// Type with a body that cannot be instantiated
    Abstract,
    /// Pure contract
    Interface,
}

/// One parameter of a constructor, method, function or closure
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    name: String,
    position: usize,
    declared_type: Option<TypeName>,
    default: Option<Value>,
    allows_null: bool,
}

impl ParameterDescriptor {
    /// Untyped parameter without default
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 0,
            declared_type: None,
            default: None,
            allows_null: false,
        }
    }

    /// Parameter with a declared type
    pub fn typed(name: impl Into<String>, declared_type: impl Into<TypeName>) -> Self {
        Self::new(name).with_type(declared_type)
    }

    /// Set the declared type
    #[must_use]
    pub fn with_type(mut self, declared_type: impl Into<TypeName>) -> Self {
        self.declared_type = Some(declared_type.into());
        self
    }

    /// Set the default value
    ///
    /// A `Null` default also lets the parameter accept null.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        let default = default.into();
        if default.is_null() {
            self.allows_null = true;
        }
        self.default = Some(default);
        self
    }

    /// Accept null without declaring a default
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.allows_null = true;
        self
    }

    /// Assign positions in declaration order
    pub fn positioned(params: Vec<Self>) -> Arc<[Self]> {
        params
            .into_iter()
            .enumerate()
            .map(|(position, mut param)| {
                param.position = position;
                param
            })
            .collect()
    }

    /// Parameter name without any marker
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Zero-based position in the parameter list
    pub fn position(&self) -> usize {
        self.position
    }

    /// Declared type, if any
    pub fn declared_type(&self) -> Option<&TypeName> {
        self.declared_type.as_ref()
    }

    /// Declared type when it names a class or interface
    pub fn declared_class(&self) -> Option<&TypeName> {
        self.declared_type.as_ref().filter(|t| !t.is_scalar())
    }

    /// Default value, if any
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Whether a default value is available
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Whether null is an acceptable value
    pub fn allows_null(&self) -> bool {
        self.allows_null
    }
}

/// Executable body attached to a function descriptor
#[derive(Clone)]
pub enum FunctionBody {
    /// Initialises an allocated instance
    Constructor(ConstructorBody),
    /// Instance or static method
    Method(MethodBody),
    /// Free function or closure
    Function(ClosureBody),
}

/// Metadata and body of a constructor, method or free function
#[derive(Clone)]
pub struct FunctionDescriptor {
    name: String,
    declaring_type: Option<TypeName>,
    params: Arc<[ParameterDescriptor]>,
    is_static: bool,
    visibility: Visibility,
    doc_comment: Option<String>,
    body: FunctionBody,
}

impl FunctionDescriptor {
    /// Describe a callable body
    pub fn new(name: impl Into<String>, body: FunctionBody) -> Self {
        Self {
            name: name.into(),
            declaring_type: None,
            params: Arc::from(Vec::new()),
            is_static: false,
            visibility: Visibility::Public,
            doc_comment: None,
            body,
        }
    }

    /// Set the type declaring this method
    #[must_use]
    pub fn declared_by(mut self, declaring_type: impl Into<TypeName>) -> Self {
        self.declaring_type = Some(declaring_type.into());
        self
    }

    /// Set the parameter list
    #[must_use]
    pub fn with_params(mut self, params: Arc<[ParameterDescriptor]>) -> Self {
        self.params = params;
        self
    }

    /// Mark as static
    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Set the visibility
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Attach doc comment text
    #[must_use]
    pub fn with_doc_comment(mut self, doc_comment: Option<String>) -> Self {
        self.doc_comment = doc_comment;
        self
    }

    /// Method or function name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Type::method` for methods, the bare name otherwise
    pub fn qualified_name(&self) -> String {
        match &self.declaring_type {
            Some(owner) => format!("{owner}::{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Type declaring this method, `None` for free functions and closures
    pub fn declaring_type(&self) -> Option<&TypeName> {
        self.declaring_type.as_ref()
    }

    /// Declared parameters
    pub fn params(&self) -> &[ParameterDescriptor] {
        &self.params
    }

    /// Shared parameter list
    pub fn shared_params(&self) -> Arc<[ParameterDescriptor]> {
        Arc::clone(&self.params)
    }

    /// Whether this is a static method
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Declared visibility
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether callers outside the type may invoke it
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Doc comment text, if any
    pub fn doc_comment(&self) -> Option<&str> {
        self.doc_comment.as_deref()
    }

    /// Whether this describes a constructor
    pub fn is_constructor(&self) -> bool {
        matches!(self.body, FunctionBody::Constructor(_))
    }

    /// Canonical key identifying this callable in caches
    pub fn cache_key(&self) -> String {
        match &self.declaring_type {
            Some(owner) => format!("{}.{}", owner.key(), normalize_name(&self.name)),
            None => normalize_name(&self.name),
        }
    }

    /// Run a constructor body against an allocated instance
    pub fn construct(&self, instance: &Instance, args: Vec<Value>) -> Result<()> {
        match &self.body {
            FunctionBody::Constructor(body) => body(instance, args),
            _ => Err(Error::invocation(format!(
                "{} is not a constructor",
                self.qualified_name()
            ))),
        }
    }

    /// Run the body
    ///
    /// Constructor bodies initialise the receiver and return it.
    pub fn call(&self, receiver: Option<&Instance>, args: Vec<Value>) -> Result<Value> {
        match &self.body {
            FunctionBody::Method(body) => body(receiver, args),
            FunctionBody::Function(body) => body(args),
            FunctionBody::Constructor(body) => {
                let instance = receiver.ok_or_else(|| {
                    Error::invocation(format!(
                        "{} requires an instance to initialise",
                        self.qualified_name()
                    ))
                })?;
                body(instance, args)?;
                Ok(Value::Object(instance.clone()))
            }
        }
    }
}

impl fmt::Debug for FunctionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionDescriptor")
            .field("name", &self.qualified_name())
            .field("params", &self.params)
            .field("is_static", &self.is_static)
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}

/// Resolved metadata of a type
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    name: TypeName,
    kind: ClassKind,
    parent: Option<TypeName>,
    constructor: Option<Arc<FunctionDescriptor>>,
    methods: HashMap<String, Arc<FunctionDescriptor>>,
    implemented: Arc<[TypeName]>,
}

impl ClassDescriptor {
    /// Assemble a descriptor
    ///
    /// `implemented` must list the type itself followed by every ancestor
    /// and interface; `methods` is keyed by lower-cased method name.
    pub fn new(
        name: TypeName,
        kind: ClassKind,
        parent: Option<TypeName>,
        constructor: Option<Arc<FunctionDescriptor>>,
        methods: HashMap<String, Arc<FunctionDescriptor>>,
        implemented: Arc<[TypeName]>,
    ) -> Self {
        Self {
            name,
            kind,
            parent,
            constructor,
            methods,
            implemented,
        }
    }

    /// Type name
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Kind of type
    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// Parent class, if any
    pub fn parent(&self) -> Option<&TypeName> {
        self.parent.as_ref()
    }

    /// Constructor (own or inherited), `None` for zero-argument construction
    pub fn constructor(&self) -> Option<&Arc<FunctionDescriptor>> {
        self.constructor.as_ref()
    }

    /// Look up a method, including inherited ones
    pub fn method(&self, name: &str) -> Option<&Arc<FunctionDescriptor>> {
        self.methods.get(&normalize_name(name))
    }

    /// Whether the type can be instantiated
    pub fn is_instantiable(&self) -> bool {
        self.kind == ClassKind::Concrete
    }

    /// Whether instances can be called directly
    pub fn is_callable_object(&self) -> bool {
        self.method(crate::constants::INVOKE_METHOD).is_some()
    }

    /// The type itself plus every ancestor and interface
    pub fn implemented(&self) -> &Arc<[TypeName]> {
        &self.implemented
    }

    /// Whether values of this type are assignable to `other`
    pub fn implements(&self, other: &TypeName) -> bool {
        self.implemented.iter().any(|t| t == other)
    }
}

/// Type information resolved for a single parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeHint {
    /// The parameter names a constructible type
    Class(TypeName),
    /// Doc comment tags exist but none yields a usable type
    Unresolved,
    /// No type information is available
    None,
}

impl TypeHint {
    /// Type name when one was resolved
    pub fn class(&self) -> Option<&TypeName> {
        match self {
            Self::Class(name) => Some(name),
            _ => None,
        }
    }
}

/// A `@param` tag extracted from a doc comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamTag {
    /// Variable name without the leading `$`
    pub variable_name: String,
    /// Raw type string, possibly with `|` separated alternatives
    pub type_string: String,
}

impl ParamTag {
    /// Alternatives in declaration order
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.type_string
            .split(crate::constants::DOC_TYPE_SEPARATOR)
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
