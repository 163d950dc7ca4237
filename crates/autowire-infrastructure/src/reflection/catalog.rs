//! Type Catalog
//!
//! In-process registry of type and function declarations. It is the
//! [`TypeSource`] the reflectors read from: applications declare their types
//! once, then hand the catalog to an injector.
//!
//! ```ignore
//! let mut catalog = TypeCatalog::new();
//! catalog
//!     .register(ClassDefinition::interface("App\\Mailer"))
//!     .register(
//!         ClassDefinition::class("App\\SmtpMailer")
//!             .implements("App\\Mailer")
//!             .constructor(MethodDefinition::constructor(
//!                 vec![ParameterDescriptor::new("host").with_default("localhost")],
//!                 |this, args| {
//!                     this.set("host", args.into_iter().next().unwrap_or_default());
//!                     Ok(())
//!                 },
//!             )),
//!     );
//! ```

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use autowire_domain::error::Result;
use autowire_domain::ports::TypeSource;
use autowire_domain::value_objects::{
    ClassDescriptor, ClassKind, FunctionBody, FunctionDescriptor, Instance, ParameterDescriptor,
    TypeName, Value, Visibility, normalize_name,
};

use crate::constants::CONSTRUCTOR_METHOD;

/// Declaration of a constructor or method
#[derive(Clone)]
pub struct MethodDefinition {
    name: String,
    params: Vec<ParameterDescriptor>,
    is_static: bool,
    visibility: Visibility,
    doc_comment: Option<String>,
    body: FunctionBody,
}

impl MethodDefinition {
    /// Declare a constructor
    ///
    /// The body receives the freshly allocated instance and the resolved
    /// argument values in parameter order.
    pub fn constructor(
        params: Vec<ParameterDescriptor>,
        body: impl Fn(&Instance, Vec<Value>) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: CONSTRUCTOR_METHOD.to_string(),
            params,
            is_static: false,
            visibility: Visibility::Public,
            doc_comment: None,
            body: FunctionBody::Constructor(Arc::new(body)),
        }
    }

    /// Declare an instance method
    ///
    /// The receiver is `None` when the method is declared static.
    pub fn new(
        name: impl Into<String>,
        params: Vec<ParameterDescriptor>,
        body: impl Fn(Option<&Instance>, Vec<Value>) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            params,
            is_static: false,
            visibility: Visibility::Public,
            doc_comment: None,
            body: FunctionBody::Method(Arc::new(body)),
        }
    }

    /// Mark the method static
    #[must_use]
    pub fn static_method(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Set the visibility
    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Attach a doc comment carrying `@param` tags
    #[must_use]
    pub fn doc(mut self, doc_comment: impl Into<String>) -> Self {
        self.doc_comment = Some(doc_comment.into());
        self
    }

    /// Declared name
    pub fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self, owner: &TypeName) -> FunctionDescriptor {
        FunctionDescriptor::new(self.name.clone(), self.body.clone())
            .declared_by(owner.clone())
            .with_params(ParameterDescriptor::positioned(self.params.clone()))
            .with_static(self.is_static)
            .with_visibility(self.visibility)
            .with_doc_comment(self.doc_comment.clone())
    }
}

/// Declaration of a class, abstract class or interface
#[derive(Clone)]
pub struct ClassDefinition {
    name: TypeName,
    kind: ClassKind,
    parent: Option<TypeName>,
    interfaces: Vec<TypeName>,
    constructor: Option<MethodDefinition>,
    methods: Vec<MethodDefinition>,
}

impl ClassDefinition {
    fn declare(name: impl Into<TypeName>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parent: None,
            interfaces: Vec::new(),
            constructor: None,
            methods: Vec::new(),
        }
    }

    /// Declare an instantiable class
    pub fn class(name: impl Into<TypeName>) -> Self {
        Self::declare(name, ClassKind::Concrete)
    }

    /// Declare an abstract class
    pub fn abstract_class(name: impl Into<TypeName>) -> Self {
        Self::declare(name, ClassKind::Abstract)
    }

    /// Declare an interface
    pub fn interface(name: impl Into<TypeName>) -> Self {
        Self::declare(name, ClassKind::Interface)
    }

    /// Set the parent class
    #[must_use]
    pub fn extends(mut self, parent: impl Into<TypeName>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Add an implemented interface (or an extended one, for interfaces)
    #[must_use]
    pub fn implements(mut self, interface: impl Into<TypeName>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Set the constructor
    #[must_use]
    pub fn constructor(mut self, constructor: MethodDefinition) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Add a method
    #[must_use]
    pub fn method(mut self, method: MethodDefinition) -> Self {
        self.methods.push(method);
        self
    }

    /// Declared name
    pub fn name(&self) -> &TypeName {
        &self.name
    }
}

/// Declaration of a free function
#[derive(Clone)]
pub struct FunctionDefinition {
    name: String,
    params: Vec<ParameterDescriptor>,
    doc_comment: Option<String>,
    body: FunctionBody,
}

impl FunctionDefinition {
    /// Declare a function
    pub fn new(
        name: impl Into<String>,
        params: Vec<ParameterDescriptor>,
        body: impl Fn(Vec<Value>) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            params,
            doc_comment: None,
            body: FunctionBody::Function(Arc::new(body)),
        }
    }

    /// Attach a doc comment carrying `@param` tags
    #[must_use]
    pub fn doc(mut self, doc_comment: impl Into<String>) -> Self {
        self.doc_comment = Some(doc_comment.into());
        self
    }

    fn describe(&self) -> FunctionDescriptor {
        FunctionDescriptor::new(
            self.name.trim_start_matches('\\').to_string(),
            self.body.clone(),
        )
        .with_params(ParameterDescriptor::positioned(self.params.clone()))
        .with_static(true)
        .with_doc_comment(self.doc_comment.clone())
    }
}

/// Registry of declared types and functions
#[derive(Clone, Default)]
pub struct TypeCatalog {
    classes: HashMap<String, ClassDefinition>,
    functions: HashMap<String, FunctionDefinition>,
}

impl TypeCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a type declaration
    pub fn register(&mut self, class: ClassDefinition) -> &mut Self {
        self.classes.insert(class.name.key().to_string(), class);
        self
    }

    /// Add or replace a function declaration
    pub fn register_function(&mut self, function: FunctionDefinition) -> &mut Self {
        self.functions
            .insert(normalize_name(&function.name), function);
        self
    }

    /// Whether a type with this name was declared
    pub fn contains_class(&self, name: &str) -> bool {
        self.classes.contains_key(&normalize_name(name))
    }

    /// Number of declared types
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    fn class(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.get(&normalize_name(name))
    }

    /// The class followed by its ancestors, stopping at an undeclared or repeated one
    fn lineage<'a>(&'a self, class: &'a ClassDefinition) -> Vec<&'a ClassDefinition> {
        let mut lineage = vec![class];
        let mut seen = HashSet::from([class.name.key()]);
        let mut current = class;
        while let Some(parent) = current.parent.as_ref().and_then(|p| self.class(p.key())) {
            if !seen.insert(parent.name.key()) {
                break;
            }
            lineage.push(parent);
            current = parent;
        }
        lineage
    }

    /// The class itself, its ancestors and every interface reachable from them
    fn implemented(&self, class: &ClassDefinition) -> Arc<[TypeName]> {
        let mut result = Vec::new();
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([class.name.clone()]);

        while let Some(name) = queue.pop_front() {
            if !seen.insert(name.key().to_string()) {
                continue;
            }
            if let Some(declared) = self.class(name.key()) {
                queue.extend(declared.parent.iter().cloned());
                queue.extend(declared.interfaces.iter().cloned());
                result.push(declared.name.clone());
            } else {
                result.push(name);
            }
        }

        result.into()
    }
}

impl TypeSource for TypeCatalog {
    fn describe_class(&self, name: &str) -> Option<ClassDescriptor> {
        let class = self.class(name)?;
        let lineage = self.lineage(class);

        let constructor = lineage.iter().find_map(|declaring| {
            declaring
                .constructor
                .as_ref()
                .map(|ctor| Arc::new(ctor.describe(&declaring.name)))
        });

        // Walk from the root down so overriding methods replace inherited ones
        let mut methods = HashMap::new();
        for declaring in lineage.iter().rev() {
            for method in &declaring.methods {
                methods.insert(
                    normalize_name(&method.name),
                    Arc::new(method.describe(&declaring.name)),
                );
            }
        }

        Some(ClassDescriptor::new(
            class.name.clone(),
            class.kind,
            class.parent.clone(),
            constructor,
            methods,
            self.implemented(class),
        ))
    }

    fn describe_function(&self, name: &str) -> Option<FunctionDescriptor> {
        self.functions
            .get(&normalize_name(name))
            .map(FunctionDefinition::describe)
    }
}
