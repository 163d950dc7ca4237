//! Reflector tests

use std::sync::Arc;

use autowire_domain::error::ReasonCode;
use autowire_domain::ports::{ReflectionCache, Reflector};
use autowire_domain::value_objects::{Arguments, TypeHint, TypeName};
use autowire_infrastructure::config::ReflectionConfig;
use autowire_infrastructure::reflection::{
    CachingReflector, DashMapReflectionCache, StandardReflector, reflector_for,
};

use crate::fixtures::*;

fn standard() -> StandardReflector {
    StandardReflector::new(Arc::new(catalog()))
}

#[test]
fn test_standard_reflector_describes_catalog() {
    let reflector = standard();
    let class = reflector.class_of("fixture\\depimplementation").unwrap();
    assert_eq!(class.name().as_str(), DEP_IMPLEMENTATION);
    assert!(class.implements(&TypeName::new(DEP_INTERFACE)));

    let implemented = reflector.implemented_by(DEP_IMPLEMENTATION).unwrap();
    assert_eq!(implemented.len(), 2);
    assert!(reflector.constructor_params(DEP_INTERFACE).unwrap().is_none());
    assert_eq!(
        reflector.constructor_params(TYPED_AND_PLAIN).unwrap().unwrap().len(),
        2
    );
}

#[test]
fn test_missing_metadata_errors() {
    let reflector = standard();
    let err = reflector.class_of("Nowhere").unwrap_err();
    assert_eq!(err.reason(), ReasonCode::ClassLoadFailure);
    assert!(!reflector.class_exists("Nowhere"));

    let err = reflector.method_of(EXECUTE_CLASS, "missing").unwrap_err();
    assert_eq!(err.reason(), ReasonCode::InvokableNotFound);
    let err = reflector.function_of("missing").unwrap_err();
    assert_eq!(err.reason(), ReasonCode::InvokableNotFound);
}

#[test]
fn test_caching_reflector_memoizes_descriptors() {
    let reflector = CachingReflector::new(standard());
    let first = reflector.class_of(TEST_DEPENDENCY).unwrap();
    let second = reflector.class_of("\\fixture\\testdependency").unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let first = reflector.method_of(EXECUTE_CLASS, "doSomething").unwrap();
    let second = reflector.method_of(EXECUTE_CLASS, "DOSOMETHING").unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let uncached = standard();
    let first = uncached.class_of(TEST_DEPENDENCY).unwrap();
    let second = uncached.class_of(TEST_DEPENDENCY).unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_caching_reflector_matches_standard_results() {
    let caching = CachingReflector::new(standard());
    let uncached = standard();
    for name in [NEEDS_DEP, DEP_IMPLEMENTATION, CHILD_EXECUTE] {
        assert_eq!(
            caching.implemented_by(name).unwrap(),
            uncached.implemented_by(name).unwrap()
        );
    }
    let ctor = caching.constructor_of(NEEDS_DEP).unwrap().unwrap();
    let param = &ctor.params()[0];
    assert_eq!(
        caching.param_type_hint(&ctor, param, &Arguments::new()).unwrap(),
        uncached.param_type_hint(&ctor, param, &Arguments::new()).unwrap()
    );
}

#[test]
fn test_doc_hints_are_computed_per_call() {
    let reflector = CachingReflector::new(standard());
    let ctor = reflector.constructor_of(DOC_HINTED).unwrap().unwrap();
    let param = &ctor.params()[0];

    let hint = reflector.param_type_hint(&ctor, param, &Arguments::new()).unwrap();
    assert_eq!(hint, TypeHint::Class(TypeName::new(DEP_INTERFACE)));

    let dep = autowire_domain::value_objects::Instance::new(TEST_DEPENDENCY);
    let hint = reflector
        .param_type_hint(&ctor, param, &Arguments::positional([&dep]))
        .unwrap();
    assert_eq!(hint, TypeHint::Class(TypeName::new(TEST_DEPENDENCY)));
}

#[test]
fn test_bounded_cache_keeps_working_when_full() {
    let cache = Arc::new(DashMapReflectionCache::with_capacity(1));
    let reflector = CachingReflector::with_cache(standard(), cache.clone());
    reflector.class_of(TEST_DEPENDENCY).unwrap();
    reflector.class_of(NEEDS_DEP).unwrap();
    assert_eq!(cache.len(), 1);
    assert_eq!(
        reflector.class_of(NEEDS_DEP).unwrap().name().as_str(),
        NEEDS_DEP
    );
}

#[test]
fn test_reflector_for_honours_configuration() {
    let source = Arc::new(catalog());
    let caching = reflector_for(source.clone(), &ReflectionConfig::default());
    let first = caching.class_of(TEST_DEPENDENCY).unwrap();
    assert!(Arc::ptr_eq(&first, &caching.class_of(TEST_DEPENDENCY).unwrap()));

    let config = ReflectionConfig {
        caching: false,
        cache_capacity: None,
    };
    let direct = reflector_for(source, &config);
    let first = direct.class_of(TEST_DEPENDENCY).unwrap();
    assert!(!Arc::ptr_eq(&first, &direct.class_of(TEST_DEPENDENCY).unwrap()));
}
