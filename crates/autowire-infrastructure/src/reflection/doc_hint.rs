//! Doc comment type hint disambiguation
//!
//! A parameter without a declared type may still be documented with one or
//! more `|` separated candidate types. The candidate is picked by looking at
//! the runtime arguments:
//!
//! 1. For each candidate in declaration order, for each argument in the
//!    order given: an object argument whose implemented-type set contains the
//!    candidate, keyed positionally or by the parameter's name, selects it.
//! 2. Without a match the first candidate is used, unless it is a scalar or
//!    array type, in which case the hint stays unresolved.

use std::sync::Arc;

use autowire_domain::constants::NAMESPACE_SEPARATOR;
use autowire_domain::error::Result;
use autowire_domain::ports::Reflector;
use autowire_domain::value_objects::{
    Arguments, FunctionDescriptor, Instance, ParamTag, ParameterDescriptor, TypeHint, TypeName,
    is_scalar_type,
};

/// Pick the effective type of `param` from its `@param` tags
pub fn disambiguate(
    reflector: &dyn Reflector,
    tags: &[ParamTag],
    function: &FunctionDescriptor,
    param: &ParameterDescriptor,
    args: &Arguments,
) -> Result<TypeHint> {
    let Some(tag) = tags
        .iter()
        .find(|tag| tag.variable_name == param.name() && tag.candidates().next().is_some())
    else {
        return Ok(TypeHint::None);
    };

    let candidates: Vec<TypeName> = tag
        .candidates()
        .map(|candidate| qualify(reflector, candidate, function.declaring_type()))
        .collect();

    for candidate in &candidates {
        if candidate.is_scalar() {
            continue;
        }
        for (key, value) in args.entries() {
            let Some(object) = value.as_object() else {
                continue;
            };
            if key.targets(param.name()) && implemented_by_instance(reflector, object).contains(candidate)
            {
                return Ok(TypeHint::Class(candidate.clone()));
            }
        }
    }

    Ok(match candidates.into_iter().next() {
        Some(first) if !is_scalar_type(first.key()) => TypeHint::Class(first),
        _ => TypeHint::Unresolved,
    })
}

/// Implemented-type set of a runtime object
///
/// Objects of undeclared types implement only their own class.
pub fn implemented_by_instance(reflector: &dyn Reflector, object: &Instance) -> Arc<[TypeName]> {
    reflector
        .implemented_by(object.class().as_str())
        .unwrap_or_else(|_| Arc::from(vec![object.class().clone()]))
}

/// Resolve a doc comment type name against the declaring type's namespace
///
/// A leading separator marks an absolute name. Otherwise the namespaced
/// spelling wins when such a type exists.
fn qualify(reflector: &dyn Reflector, candidate: &str, declaring: Option<&TypeName>) -> TypeName {
    if candidate.starts_with(NAMESPACE_SEPARATOR) || is_scalar_type(candidate) {
        return TypeName::new(candidate);
    }
    if let Some(namespace) = declaring.map(TypeName::namespace).filter(|ns| !ns.is_empty()) {
        let namespaced = format!("{namespace}{NAMESPACE_SEPARATOR}{candidate}");
        if reflector.class_exists(&namespaced) {
            return TypeName::new(namespaced);
        }
    }
    TypeName::new(candidate)
}
