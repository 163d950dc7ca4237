//! Registry inspection tests

use autowire_domain::value_objects::{Arguments, Closure, Instance, Value};
use autowire_infrastructure::di::{I_ALIASES, I_ALL, I_BINDINGS, I_DELEGATES, I_PREPARES, I_SHARES};

use crate::fixtures::*;

fn configured() -> autowire_infrastructure::di::Injector {
    let mut injector = injector();
    injector.alias(DEP_INTERFACE, DEP_IMPLEMENTATION).unwrap();
    injector.share(TEST_DEPENDENCY).unwrap();
    injector
        .delegate(NEEDS_DEP, Closure::new(|_| Ok(Instance::new(NEEDS_DEP).into())))
        .unwrap();
    injector
        .define(NO_TYPEHINT, Arguments::new().raw("val", 1))
        .define_param("val", "global")
        .prepare(DEP_INTERFACE, |_, _| Ok(None))
        .prepare(DEP_INTERFACE, |_, _| Ok(None));
    injector
}

#[test]
fn test_inspect_everything() {
    let injector = configured();
    let inspection = injector.inspect(None, I_ALL);

    let aliases = inspection.aliases.unwrap();
    assert_eq!(
        aliases.get("fixture\\depinterface").map(String::as_str),
        Some(DEP_IMPLEMENTATION)
    );
    let shares = inspection.shares.unwrap();
    assert_eq!(shares.get("fixture\\testdependency"), Some(&None));
    assert!(inspection.delegates.unwrap().contains_key("fixture\\testneedsdep"));
    assert!(inspection.definitions.unwrap().contains_key("fixture\\notypehintnodefault"));
    assert_eq!(
        inspection.param_definitions.unwrap().get("val"),
        Some(&Value::from("global"))
    );
    assert_eq!(inspection.prepares.unwrap().get("fixture\\depinterface"), Some(&2));
}

#[test]
fn test_inspect_reports_built_shares() {
    let injector = configured();
    let built = injector.make(TEST_DEPENDENCY).unwrap();
    let shares = injector.inspect(Some(TEST_DEPENDENCY), I_SHARES).shares.unwrap();
    assert!(shares["fixture\\testdependency"].as_ref().unwrap().ptr_eq(&built));
}

#[test]
fn test_inspect_filters_by_name_and_flags() {
    let injector = configured();
    let inspection = injector.inspect(Some("\\FIXTURE\\DepInterface"), I_ALIASES | I_PREPARES);

    assert_eq!(inspection.aliases.unwrap().len(), 1);
    assert_eq!(inspection.prepares.unwrap().len(), 1);
    assert!(inspection.shares.is_none());
    assert!(inspection.delegates.is_none());
    assert!(inspection.definitions.is_none());

    let inspection = injector.inspect(Some(DEP_INTERFACE), I_DELEGATES | I_BINDINGS);
    assert!(inspection.delegates.unwrap().is_empty());
    assert!(inspection.definitions.unwrap().is_empty());
}
