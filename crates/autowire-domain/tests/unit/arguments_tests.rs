//! Argument Map Tests

use autowire_domain::value_objects::{ArgumentKey, Arguments, Closure, Value};

#[test]
fn test_builders_produce_keyed_entries() {
    let args = Arguments::new()
        .push("first")
        .raw("val", 1)
        .class("dep", "App\\Dep")
        .delegate("made", Closure::new(|_| Ok(Value::Null)));

    let keys: Vec<&ArgumentKey> = args.entries().iter().map(|(key, _)| key).collect();
    assert_eq!(
        keys,
        vec![
            &ArgumentKey::Position(0),
            &ArgumentKey::Raw("val".into()),
            &ArgumentKey::Class("dep".into()),
            &ArgumentKey::Delegate("made".into()),
        ]
    );
    assert_eq!(args.len(), 4);
}

#[test]
fn test_named_lookup_ignores_markers() {
    let args = Arguments::new().with("+made", "factory").with(":val", 2);
    assert!(matches!(args.named("made"), Some((ArgumentKey::Delegate(_), _))));
    assert!(matches!(args.named("val"), Some((ArgumentKey::Raw(_), Value::Int(2)))));
    assert!(args.named("other").is_none());
}

#[test]
fn test_positional_helper() {
    let args = Arguments::positional(["a", "b"]);
    let values: Vec<(usize, &Value)> = args.positional_values().collect();
    assert_eq!(values, vec![(0, &Value::from("a")), (1, &Value::from("b"))]);
    assert!(Arguments::new().is_empty());
    assert!(ArgumentKey::Position(1).is_positional());
    assert_eq!(ArgumentKey::Class("dep".into()).parameter_name(), Some("dep"));
}
