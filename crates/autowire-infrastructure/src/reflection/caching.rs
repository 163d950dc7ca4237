//! Memoizing metadata provider
//!
//! Decorates a [`StandardReflector`] and keeps every result in a
//! [`ReflectionCache`]. Type metadata never changes for the process, so
//! entries are never invalidated.
//!
//! Doc comment hints are the one exception to whole-result memoization:
//! their outcome depends on the runtime arguments of each call. The parsed
//! tags are memoized and the disambiguation itself runs on every call.

use std::sync::Arc;

use autowire_domain::error::Result;
use autowire_domain::ports::{CachedReflection, ReflectionCache, Reflector};
use autowire_domain::value_objects::{
    Arguments, ClassDescriptor, FunctionDescriptor, ParamTag, ParameterDescriptor, TypeHint,
    TypeName, normalize_name,
};
use tracing::debug;

use super::cache::DashMapReflectionCache;
use super::doc_hint;
use super::standard::StandardReflector;
use crate::constants::*;

/// Cached [`Reflector`]
#[derive(Clone)]
pub struct CachingReflector {
    inner: StandardReflector,
    cache: Arc<dyn ReflectionCache>,
}

impl CachingReflector {
    /// Wrap `inner` with an unbounded in-memory cache
    pub fn new(inner: StandardReflector) -> Self {
        Self::with_cache(inner, Arc::new(DashMapReflectionCache::new()))
    }

    /// Wrap `inner` with a custom cache
    pub fn with_cache(inner: StandardReflector, cache: Arc<dyn ReflectionCache>) -> Self {
        Self { inner, cache }
    }

    /// Backing cache
    pub fn cache(&self) -> &Arc<dyn ReflectionCache> {
        &self.cache
    }

    fn param_tags(&self, function: &FunctionDescriptor) -> Arc<[ParamTag]> {
        let key = format!("{CACHE_KEY_PARAM_TAGS}.{}", function.cache_key());
        if let Some(CachedReflection::ParamTags(tags)) = self.cache.fetch(&key) {
            return tags;
        }
        let tags: Arc<[ParamTag]> = self.inner.param_tags(function).into();
        self.cache
            .store(&key, CachedReflection::ParamTags(Arc::clone(&tags)));
        tags
    }

    /// Load the descriptor of a hinted type ahead of its construction
    fn warm(&self, hint: &TypeHint) {
        if let Some(class) = hint.class() {
            // Unknown types surface later, when they are actually built
            let _ = self.class_of(class.as_str());
        }
    }
}

impl Reflector for CachingReflector {
    fn class_of(&self, name: &str) -> Result<Arc<ClassDescriptor>> {
        let key = format!("{CACHE_KEY_CLASS}.{}", normalize_name(name));
        if let Some(CachedReflection::Class(class)) = self.cache.fetch(&key) {
            return Ok(class);
        }
        debug!(class = name, "reflection cache miss");
        let class = self.inner.class_of(name)?;
        self.cache
            .store(&key, CachedReflection::Class(Arc::clone(&class)));
        Ok(class)
    }

    fn constructor_of(&self, name: &str) -> Result<Option<Arc<FunctionDescriptor>>> {
        let key = format!("{CACHE_KEY_CONSTRUCTOR}.{}", normalize_name(name));
        if let Some(CachedReflection::Constructor(ctor)) = self.cache.fetch(&key) {
            return Ok(ctor);
        }
        let ctor = self.class_of(name)?.constructor().cloned();
        self.cache
            .store(&key, CachedReflection::Constructor(ctor.clone()));
        Ok(ctor)
    }

    fn constructor_params(&self, name: &str) -> Result<Option<Arc<[ParameterDescriptor]>>> {
        let key = format!("{CACHE_KEY_CONSTRUCTOR_PARAMS}.{}", normalize_name(name));
        if let Some(CachedReflection::ConstructorParams(params)) = self.cache.fetch(&key) {
            return Ok(params);
        }
        let params = self
            .constructor_of(name)?
            .map(|ctor| ctor.shared_params());
        self.cache
            .store(&key, CachedReflection::ConstructorParams(params.clone()));
        Ok(params)
    }

    fn function_of(&self, name: &str) -> Result<Arc<FunctionDescriptor>> {
        let key = format!("{CACHE_KEY_FUNCTION}.{}", normalize_name(name));
        if let Some(CachedReflection::Function(function)) = self.cache.fetch(&key) {
            return Ok(function);
        }
        debug!(function = name, "reflection cache miss");
        let function = self.inner.function_of(name)?;
        self.cache
            .store(&key, CachedReflection::Function(Arc::clone(&function)));
        Ok(function)
    }

    fn method_of(&self, class: &str, method: &str) -> Result<Arc<FunctionDescriptor>> {
        let key = format!(
            "{CACHE_KEY_METHOD}.{}.{}",
            normalize_name(class),
            normalize_name(method)
        );
        if let Some(CachedReflection::Function(function)) = self.cache.fetch(&key) {
            return Ok(function);
        }
        let descriptor = self.class_of(class)?;
        let function = match descriptor.method(method) {
            Some(function) => Arc::clone(function),
            None => return self.inner.method_of(class, method),
        };
        self.cache
            .store(&key, CachedReflection::Function(Arc::clone(&function)));
        Ok(function)
    }

    fn param_type_hint(
        &self,
        function: &FunctionDescriptor,
        param: &ParameterDescriptor,
        args: &Arguments,
    ) -> Result<TypeHint> {
        // Closures share one name, so their hints are never memoized
        if function.declaring_type().is_none() && function.name() == CLOSURE_NAME {
            return self.inner.param_type_hint(function, param, args);
        }

        let key = format!(
            "{CACHE_KEY_TYPE_HINT}.{}.{}",
            function.cache_key(),
            param.name()
        );
        if let Some(CachedReflection::TypeHint(hint)) = self.cache.fetch(&key) {
            return Ok(hint);
        }

        if let Some(declared) = param.declared_class() {
            let hint = TypeHint::Class(declared.clone());
            self.warm(&hint);
            self.cache
                .store(&key, CachedReflection::TypeHint(hint.clone()));
            return Ok(hint);
        }

        let tags = self.param_tags(function);
        if tags.is_empty() {
            self.cache
                .store(&key, CachedReflection::TypeHint(TypeHint::None));
            return Ok(TypeHint::None);
        }

        let hint = doc_hint::disambiguate(self, &tags, function, param, args)?;
        self.warm(&hint);
        Ok(hint)
    }

    fn implemented_by(&self, name: &str) -> Result<Arc<[TypeName]>> {
        let key = format!("{CACHE_KEY_IMPLEMENTED}.{}", normalize_name(name));
        if let Some(CachedReflection::Implemented(implemented)) = self.cache.fetch(&key) {
            return Ok(implemented);
        }
        let implemented = Arc::clone(self.class_of(name)?.implemented());
        self.cache
            .store(&key, CachedReflection::Implemented(Arc::clone(&implemented)));
        Ok(implemented)
    }
}
