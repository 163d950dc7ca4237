//! Direct metadata provider
//!
//! Consults the [`TypeSource`] on every lookup. Mostly useful when types are
//! declared while the injector is alive, and as the inner provider of the
//! caching decorator.

use std::sync::Arc;

use autowire_domain::constants::PARAM_TAG;
use autowire_domain::error::{Error, ReasonCode, Result};
use autowire_domain::ports::{DocTagParser, Reflector, TypeSource};
use autowire_domain::value_objects::{
    Arguments, ClassDescriptor, FunctionDescriptor, ParamTag, ParameterDescriptor, TypeHint,
    TypeName,
};

use super::doc_hint;
use super::doc_parser::RegexDocTagParser;

/// Uncached [`Reflector`]
#[derive(Clone)]
pub struct StandardReflector {
    source: Arc<dyn TypeSource>,
    doc_parser: Arc<dyn DocTagParser>,
}

impl StandardReflector {
    /// Reflector reading `source`, parsing doc comments with the regex parser
    pub fn new(source: Arc<dyn TypeSource>) -> Self {
        Self::with_doc_parser(source, Arc::new(RegexDocTagParser::new()))
    }

    /// Reflector with a custom doc comment parser
    pub fn with_doc_parser(source: Arc<dyn TypeSource>, doc_parser: Arc<dyn DocTagParser>) -> Self {
        Self { source, doc_parser }
    }

    /// `@param` tags of a callable's doc comment
    pub fn param_tags(&self, function: &FunctionDescriptor) -> Vec<ParamTag> {
        function
            .doc_comment()
            .map(|doc| self.doc_parser.tags_named(doc, PARAM_TAG))
            .unwrap_or_default()
    }
}

impl Reflector for StandardReflector {
    fn class_of(&self, name: &str) -> Result<Arc<ClassDescriptor>> {
        self.source
            .describe_class(name)
            .map(Arc::new)
            .ok_or_else(|| Error::class_load(name.trim_start_matches('\\')))
    }

    fn constructor_of(&self, name: &str) -> Result<Option<Arc<FunctionDescriptor>>> {
        Ok(self.class_of(name)?.constructor().cloned())
    }

    fn constructor_params(&self, name: &str) -> Result<Option<Arc<[ParameterDescriptor]>>> {
        Ok(self
            .constructor_of(name)?
            .map(|ctor| ctor.shared_params()))
    }

    fn function_of(&self, name: &str) -> Result<Arc<FunctionDescriptor>> {
        self.source
            .describe_function(name)
            .map(Arc::new)
            .ok_or_else(|| {
                Error::resolution(
                    ReasonCode::InvokableNotFound,
                    format!("Function {name} does not exist"),
                )
            })
    }

    fn method_of(&self, class: &str, method: &str) -> Result<Arc<FunctionDescriptor>> {
        self.class_of(class)?.method(method).cloned().ok_or_else(|| {
            Error::resolution(
                ReasonCode::InvokableNotFound,
                format!("Method {class}::{method} does not exist"),
            )
        })
    }

    fn param_type_hint(
        &self,
        function: &FunctionDescriptor,
        param: &ParameterDescriptor,
        args: &Arguments,
    ) -> Result<TypeHint> {
        if let Some(declared) = param.declared_class() {
            return Ok(TypeHint::Class(declared.clone()));
        }
        let tags = self.param_tags(function);
        if tags.is_empty() {
            return Ok(TypeHint::None);
        }
        doc_hint::disambiguate(self, &tags, function, param, args)
    }

    fn implemented_by(&self, name: &str) -> Result<Arc<[TypeName]>> {
        Ok(Arc::clone(self.class_of(name)?.implemented()))
    }
}
