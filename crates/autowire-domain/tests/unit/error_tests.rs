//! Error Tests

use autowire_domain::error::{Error, ReasonCode};

#[test]
fn test_resolution_chain_is_attached_once() {
    let err = Error::resolution(ReasonCode::UndefinedParameter, "no value")
        .with_chain(&["a".to_string(), "b".to_string()])
        .with_chain(&["a".to_string()]);
    assert_eq!(err.dependency_chain(), ["a", "b"]);
    assert_eq!(err.reason(), ReasonCode::UndefinedParameter);
}

#[test]
fn test_class_load_errors_carry_chain() {
    let err = Error::class_load("App\\Missing").with_chain(&["app\\missing".to_string()]);
    assert_eq!(err.reason(), ReasonCode::ClassLoadFailure);
    assert_eq!(err.dependency_chain(), ["app\\missing"]);
    assert_eq!(err.to_string(), "Could not load class App\\Missing");
}

#[test]
fn test_configuration_errors_have_no_chain() {
    let err = Error::configuration(ReasonCode::AliasedCannotShare, "aliased")
        .with_chain(&["x".to_string()]);
    assert!(err.is_configuration());
    assert!(err.dependency_chain().is_empty());
}

#[test]
fn test_reason_identifiers() {
    assert_eq!(ReasonCode::CyclicDependency.as_str(), "cyclic-dependency");
    assert_eq!(ReasonCode::NeedsDefinition.to_string(), "needs-explicit-definition");
    assert_eq!(
        Error::invocation("boom").reason(),
        ReasonCode::InvocationFailed
    );
    assert_eq!(Error::settings("bad").reason(), ReasonCode::InvalidSettings);
}
