//! Object graph construction tests

use autowire_domain::error::ReasonCode;
use autowire_domain::value_objects::{Arguments, Closure, Instance, Value};

use crate::fixtures::*;

#[test]
fn test_make_builds_type_without_dependencies() {
    let injector = injector();
    let dep = injector.make(TEST_DEPENDENCY).unwrap();
    assert_eq!(dep.class().as_str(), TEST_DEPENDENCY);
    assert_eq!(dep.prop("testProp"), Value::from("testVal"));
}

#[test]
fn test_make_injects_typed_dependencies() {
    let injector = injector();
    let needs = injector.make(NEEDS_DEP).unwrap();
    let dep = object_prop(&needs, "testDep").unwrap();
    assert_eq!(dep.prop("testProp"), Value::from("testVal"));
}

#[test]
fn test_type_names_are_case_insensitive() {
    let injector = injector();
    let dep = injector.make("\\fixture\\TESTDEPENDENCY").unwrap();
    assert_eq!(dep.class().as_str(), TEST_DEPENDENCY);
}

#[test]
fn test_make_returns_fresh_instances_when_not_shared() {
    let injector = injector();
    let first = injector.make(TEST_DEPENDENCY).unwrap();
    let second = injector.make(TEST_DEPENDENCY).unwrap();
    assert!(!first.ptr_eq(&second));
    assert_eq!(first, second);
}

#[test]
fn test_interface_without_alias_needs_definition() {
    let injector = injector();
    let err = injector.make(REQUIRES_INTERFACE).unwrap_err();
    assert_eq!(err.reason(), ReasonCode::NeedsDefinition);
    assert!(err.to_string().contains("interface Fixture\\DepInterface"));
    assert_eq!(
        err.dependency_chain(),
        ["fixture\\requiresinterface", "fixture\\depinterface"]
    );

    let err = injector.make(ABSTRACT_BASE).unwrap_err();
    assert_eq!(err.reason(), ReasonCode::NeedsDefinition);
    assert!(err.to_string().contains("abstract class"));
}

#[test]
fn test_untyped_parameter_without_source_fails() {
    let injector = injector();
    let err = injector.make(NO_TYPEHINT).unwrap_err();
    assert_eq!(err.reason(), ReasonCode::UndefinedParameter);
    assert!(
        err.to_string()
            .contains("$val at position 0 in Fixture\\NoTypehintNoDefault::__construct()")
    );
}

#[test]
fn test_null_default_is_used_for_untyped_parameter() {
    let injector = injector();
    let made = injector.make(NULL_DEFAULT).unwrap();
    assert!(made.prop("val").is_null());
}

#[test]
fn test_default_is_used_when_hinted_type_cannot_be_built() {
    let mut injector = injector();
    let made = injector.make(TYPED_NULL_DEFAULT).unwrap();
    assert!(made.prop("val").is_null());

    injector.alias(DEP_INTERFACE, DEP_IMPLEMENTATION).unwrap();
    let made = injector.make(TYPED_NULL_DEFAULT).unwrap();
    assert_eq!(object_prop(&made, "val").unwrap().class().as_str(), DEP_IMPLEMENTATION);
}

#[test]
fn test_cyclic_dependency_reports_full_chain() {
    let injector = injector();
    let err = injector.make(RECURSIVE_A).unwrap_err();
    assert_eq!(err.reason(), ReasonCode::CyclicDependency);
    assert_eq!(
        err.dependency_chain(),
        ["fixture\\recursivea", "fixture\\recursiveb", "fixture\\recursivea"]
    );
    assert!(err.to_string().contains("fixture\\recursivea -> fixture\\recursiveb"));
}

#[test]
fn test_self_and_three_step_cycles() {
    let injector = injector();
    let err = injector.make(SELF_REF).unwrap_err();
    assert_eq!(err.reason(), ReasonCode::CyclicDependency);
    assert_eq!(err.dependency_chain(), ["fixture\\selfref", "fixture\\selfref"]);

    let err = injector.make(CHAIN_2).unwrap_err();
    assert_eq!(err.reason(), ReasonCode::CyclicDependency);
    assert_eq!(
        err.dependency_chain(),
        [
            "fixture\\chain2",
            "fixture\\chain3",
            "fixture\\chain1",
            "fixture\\chain2"
        ]
    );
}

#[test]
fn test_chain_is_unwound_after_failure() {
    let injector = injector();
    assert!(injector.make(RECURSIVE_A).is_err());
    assert!(injector.make(TEST_DEPENDENCY).is_ok());
}

#[test]
fn test_non_public_constructor_is_rejected() {
    let injector = injector();
    let err = injector.make(PRIVATE_CTOR).unwrap_err();
    assert_eq!(err.reason(), ReasonCode::NonPublicConstructor);
}

#[test]
fn test_unknown_type_fails_to_load() {
    let injector = injector();
    let err = injector.make("Missing\\Thing").unwrap_err();
    assert_eq!(err.reason(), ReasonCode::ClassLoadFailure);
    assert_eq!(err.dependency_chain(), ["missing\\thing"]);
}

#[test]
fn test_define_supplies_named_raw_value() {
    let mut injector = injector();
    injector.define(NO_TYPEHINT, Arguments::new().raw("val", 42));
    let made = injector.make(NO_TYPEHINT).unwrap();
    assert_eq!(made.prop("val"), Value::Int(42));
}

#[test]
fn test_define_supplies_positional_value() {
    let mut injector = injector();
    injector.define(NO_TYPEHINT, Arguments::positional([7]));
    assert_eq!(injector.make(NO_TYPEHINT).unwrap().prop("val"), Value::Int(7));
}

#[test]
fn test_define_class_binding_builds_named_type() {
    let mut injector = injector();
    injector.define(
        REQUIRES_INTERFACE,
        Arguments::new().class("dep", DEP_IMPLEMENTATION),
    );
    let made = injector.make(REQUIRES_INTERFACE).unwrap();
    assert_eq!(object_prop(&made, "dep").unwrap().class().as_str(), DEP_IMPLEMENTATION);
}

#[test]
fn test_runtime_arguments_override_definitions() {
    let mut injector = injector();
    injector.define(NO_TYPEHINT, Arguments::new().raw("val", 2));
    let made = injector
        .make_with(NO_TYPEHINT, &Arguments::new().raw("val", 1))
        .unwrap();
    assert_eq!(made.prop("val"), Value::Int(1));
}

#[test]
fn test_string_keys_parse_into_bindings() {
    let injector = injector();
    let args = Arguments::new().with(":val", "literal");
    let made = injector.make_with(NO_TYPEHINT, &args).unwrap();
    assert_eq!(made.prop("val"), Value::from("literal"));

    let args = Arguments::new().with("dep", DEP_IMPLEMENTATION);
    let made = injector.make_with(REQUIRES_INTERFACE, &args).unwrap();
    assert_eq!(object_prop(&made, "dep").unwrap().class().as_str(), DEP_IMPLEMENTATION);
}

#[test]
fn test_keys_naming_no_parameter_are_ignored() {
    let injector = injector();
    let args = Arguments::new()
        .with("distractor", "App\\Nowhere")
        .with(":unrelated", 3)
        .raw("val", 1);
    assert_eq!(injector.make_with(NO_TYPEHINT, &args).unwrap().prop("val"), Value::Int(1));
}

#[test]
fn test_delegate_binding_executes_invokable() {
    let injector = injector();
    let args = Arguments::new().delegate("val", Closure::new(|_| Ok(Value::from(5))));
    let made = injector.make_with(NO_TYPEHINT, &args).unwrap();
    assert_eq!(made.prop("val"), Value::Int(5));
}

#[test]
fn test_global_param_definition_fills_untyped_parameter() {
    let mut injector = injector();
    injector.define_param("val", "everywhere");
    assert_eq!(
        injector.make(NO_TYPEHINT).unwrap().prop("val"),
        Value::from("everywhere")
    );
    let nested = injector.make(NEEDS_NO_TYPEHINT).unwrap();
    assert_eq!(
        object_prop(&nested, "inner").unwrap().prop("val"),
        Value::from("everywhere")
    );
}

#[test]
fn test_definitions_do_not_reach_dependencies() {
    let injector = injector();
    let err = injector
        .make_with(NEEDS_NO_TYPEHINT, &Arguments::new().raw("val", 9))
        .unwrap_err();
    assert_eq!(err.reason(), ReasonCode::UndefinedParameter);
    assert_eq!(
        err.dependency_chain(),
        ["fixture\\needsnotypehint", "fixture\\notypehintnodefault"]
    );
}

#[test]
fn test_positional_objects_are_claimed_by_type() {
    let injector = injector();
    let dep = Instance::new(TEST_DEPENDENCY);
    let args = Arguments::positional([Value::from("plain"), Value::from(&dep)]);
    let made = injector.make_with(TYPED_AND_PLAIN, &args).unwrap();
    assert!(object_prop(&made, "dep").unwrap().ptr_eq(&dep));
    assert_eq!(made.prop("plain"), Value::from("plain"));
}

#[test]
fn test_uncached_reflector_builds_same_graph() {
    let mut injector = uncached_injector();
    injector.alias(DEP_INTERFACE, DEP_IMPLEMENTATION).unwrap();
    let made = injector.make(REQUIRES_INTERFACE).unwrap();
    assert_eq!(
        object_prop(&made, "dep").unwrap().prop("testProp1"),
        Value::from("something")
    );
}
