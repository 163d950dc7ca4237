//! Invokable classification and execution tests

use autowire_domain::error::{ReasonCode, Result};
use autowire_domain::value_objects::{Arguments, Closure, Instance, ParameterDescriptor, Value};
use autowire_infrastructure::di::{Executable, describe_invokable};

use crate::fixtures::*;

#[test]
fn test_execute_free_function_with_positional_arguments() {
    let injector = injector();
    let result = injector
        .execute_with("fixture_add", &Arguments::positional([1, 2]))
        .unwrap();
    assert_eq!(result, Value::Int(3));
}

#[test]
fn test_execute_resolves_function_dependencies() {
    let injector = injector();
    assert_eq!(
        injector.execute("\\fixture_dep_prop").unwrap(),
        Value::from("testVal")
    );
}

#[test]
fn test_execute_instance_method_by_name() {
    let injector = injector();
    let method = format!("{EXECUTE_CLASS}::doSomething");
    assert_eq!(injector.execute(method).unwrap(), Value::Int(42));
}

#[test]
fn test_execute_static_method() {
    let injector = injector();
    let method = format!("{EXECUTE_CLASS}::doStatic");
    assert_eq!(injector.execute(method).unwrap(), Value::Int(21));
    assert_eq!(
        injector
            .execute(Value::pair(EXECUTE_CLASS, "doStatic"))
            .unwrap(),
        Value::Int(21)
    );
}

#[test]
fn test_execute_type_and_method_pair() {
    let injector = injector();
    let result = injector
        .execute(Value::pair(EXECUTE_CLASS, "doSomething"))
        .unwrap();
    assert_eq!(result, Value::Int(42));
}

#[test]
fn test_execute_instance_and_method_pair() {
    let injector = injector();
    let receiver = Instance::new(EXECUTE_CLASS);
    let result = injector
        .execute_with(
            Value::pair(&receiver, "greet"),
            &Arguments::new().raw("name", "world"),
        )
        .unwrap();
    assert_eq!(result, Value::from("hello world"));

    injector
        .execute_with(Value::pair(&receiver, "remember"), &Arguments::positional([5]))
        .unwrap();
    assert_eq!(receiver.prop("remembered"), Value::Int(5));
}

#[test]
fn test_execute_uses_shared_receiver() {
    let mut injector = injector();
    injector.share(EXECUTE_CLASS).unwrap();
    let method = format!("{EXECUTE_CLASS}::remember");
    injector
        .execute_with(method, &Arguments::new().raw("value", "kept"))
        .unwrap();
    assert_eq!(
        injector.make(EXECUTE_CLASS).unwrap().prop("remembered"),
        Value::from("kept")
    );
}

#[test]
fn test_execute_closure_resolves_parameters() {
    let injector = injector();
    let closure = Closure::with_params(
        vec![
            ParameterDescriptor::typed("dep", TEST_DEPENDENCY),
            ParameterDescriptor::new("suffix").with_default("!"),
        ],
        |args| {
            let prop = args[0].as_object().map(|dep| dep.prop("testProp"));
            let prop = prop.as_ref().and_then(Value::as_str).unwrap_or_default();
            let suffix = args[1].as_str().unwrap_or_default();
            Ok(Value::from(format!("{prop}{suffix}")))
        },
    );
    assert_eq!(injector.execute(closure).unwrap(), Value::from("testVal!"));
}

#[test]
fn test_closures_with_shared_parameter_names_keep_own_types() {
    let injector = injector();
    let class_of_dep = |args: Vec<Value>| -> Result<Value> {
        Ok(args[0]
            .class()
            .map(|class| Value::from(class.as_str()))
            .unwrap_or_default())
    };
    let first = Closure::with_params(
        vec![ParameterDescriptor::typed("dep", TEST_DEPENDENCY)],
        class_of_dep,
    );
    let second = Closure::with_params(
        vec![ParameterDescriptor::typed("dep", DEP_IMPLEMENTATION)],
        class_of_dep,
    );
    assert_eq!(injector.execute(first).unwrap(), Value::from(TEST_DEPENDENCY));
    assert_eq!(injector.execute(second).unwrap(), Value::from(DEP_IMPLEMENTATION));
}

#[test]
fn test_execute_callable_object() {
    let injector = injector();
    let result = injector.execute(Instance::new(INVOKABLE)).unwrap();
    assert_eq!(result.class().unwrap().as_str(), TEST_DEPENDENCY);

    let result = injector.execute(INVOKABLE).unwrap();
    assert_eq!(result.class().unwrap().as_str(), TEST_DEPENDENCY);
}

#[test]
fn test_execute_parent_method() {
    let injector = injector();
    assert_eq!(
        injector.execute(format!("{CHILD_EXECUTE}::run")).unwrap(),
        Value::from("child")
    );
    assert_eq!(
        injector
            .execute(format!("{CHILD_EXECUTE}::parent::run"))
            .unwrap(),
        Value::from("parent")
    );
}

#[test]
fn test_execute_follows_alias_for_instance_method() {
    let mut injector = injector();
    injector.alias(PARENT_EXECUTE, CHILD_EXECUTE).unwrap();
    assert_eq!(
        injector.execute(Value::pair(PARENT_EXECUTE, "run")).unwrap(),
        Value::from("child")
    );
    assert_eq!(
        injector.execute(format!("{PARENT_EXECUTE}::run")).unwrap(),
        Value::from("child")
    );
}

#[test]
fn test_execute_follows_alias_for_static_method() {
    let mut injector = injector();
    assert_eq!(
        injector.execute(format!("{PARENT_EXECUTE}::label")).unwrap(),
        Value::from("parent")
    );
    injector.alias(PARENT_EXECUTE, CHILD_EXECUTE).unwrap();
    assert_eq!(
        injector.execute(format!("{PARENT_EXECUTE}::label")).unwrap(),
        Value::from("child")
    );
    assert_eq!(
        injector.execute(Value::pair(PARENT_EXECUTE, "label")).unwrap(),
        Value::from("child")
    );
}

#[test]
fn test_execute_on_delegated_abstract_type_runs_concrete_method() {
    let mut injector = injector();
    injector
        .delegate(
            ABSTRACT_BASE,
            Closure::new(|_| Ok(Instance::new(CONCRETE_BASE).into())),
        )
        .unwrap();
    assert_eq!(
        injector.execute(format!("{ABSTRACT_BASE}::describe")).unwrap(),
        Value::from("concrete")
    );
}

#[test]
fn test_unknown_invokables_are_rejected() {
    let injector = injector();
    for invokable in [
        Value::from(42),
        Value::from("no_such_function"),
        Value::from(format!("{EXECUTE_CLASS}::missing")),
        Value::from(format!("{PARENT_EXECUTE}::parent::run")),
        Value::Array(vec![Value::from(EXECUTE_CLASS)]),
    ] {
        let err = injector.execute(invokable).unwrap_err();
        assert_eq!(err.reason(), ReasonCode::InvokableNotFound);
    }
}

#[test]
fn test_build_executable_classifies_once() {
    let injector = injector();
    let bound = injector
        .build_executable(format!("{EXECUTE_CLASS}::greet"))
        .unwrap();
    assert!(matches!(bound.executable(), Executable::InstanceMethod { .. }));
    assert_eq!(
        bound.call_with(&Arguments::positional(["a"])).unwrap(),
        Value::from("hello a")
    );
    assert_eq!(
        bound.call_with(&Arguments::positional(["b"])).unwrap(),
        Value::from("hello b")
    );

    let bound = injector.build_executable("fixture_add").unwrap();
    assert!(matches!(bound.executable(), Executable::FreeFunction(_)));
    let bound = injector.build_executable(Instance::new(INVOKABLE)).unwrap();
    assert!(matches!(bound.executable(), Executable::CallableObject { .. }));
    assert!(bound.call().is_ok());
}

#[test]
fn test_invokable_descriptions() {
    assert_eq!(describe_invokable(&Value::from("fn")), "fn");
    assert_eq!(
        describe_invokable(&Value::pair(Instance::new("stdClass"), "method")),
        "[object(stdClass), 'method']"
    );
    assert_eq!(describe_invokable(&Value::from(1.5)), "float");
}
