use super::*;
use crate::{EvalErrorKind, FunctionValue};
use pretty_assertions::assert_eq;

fn name(s: &str) -> Name {
    Rc::from(s)
}

#[test]
fn get_walks_outward() {
    let global = Environment::new();
    global.set(name("y"), Value::int(10));
    let local = global.child();
    local.set(name("x"), Value::int(5));

    assert_eq!(local.get("x"), Some(Value::int(5)));
    assert_eq!(local.get("y"), Some(Value::int(10)));
    assert_eq!(global.get("x"), None);
    assert_eq!(local.depth(), 2);
}

#[test]
fn inner_binding_shadows_outer() {
    let global = Environment::new();
    global.set(name("x"), Value::int(1));
    let local = global.child();
    local.set(name("x"), Value::int(2));
    assert_eq!(local.get("x"), Some(Value::int(2)));
    assert_eq!(global.get("x"), Some(Value::int(1)));
}

#[test]
fn set_never_writes_parent() {
    let global = Environment::new();
    global.set(name("x"), Value::int(1));
    let local = global.child();
    local.set(name("x"), Value::int(99));
    assert!(!global.contains_local("y"));
    assert_eq!(global.get("x"), Some(Value::int(1)));
    assert!(local.contains_local("x"));
}

#[test]
fn set_overwrites_in_place() {
    let env = Environment::new();
    env.set(name("x"), Value::int(1));
    env.set(name("x"), Value::int(2));
    assert_eq!(env.get("x"), Some(Value::int(2)));
    assert_eq!(format!("{env:?}"), "Environment { bindings: 1, depth: 1 }");
}

#[test]
fn resolve_failure_carries_origin() {
    let env = Environment::new();
    let err = env.resolve("foo", Span::new(1, 4)).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnresolvedIdentifier {
            name: "foo".to_string()
        }
    );
    assert_eq!(err.span, Some(Span::new(1, 4)));
    assert_eq!(err.to_string(), "unable to resolve 'foo'");
}

#[test]
fn resolve_retags_origin() {
    let env = Environment::new();
    env.set(name("x"), Value::int(3).with_origin(Span::new(0, 1)));
    let v = env.resolve("x", Span::new(8, 9)).unwrap();
    assert_eq!(v, Value::int(3));
    assert_eq!(v.origin, Span::new(8, 9));
}

#[test]
fn call_scope_binds_params_in_order() {
    let defining = Environment::new();
    defining.set(name("y"), Value::int(10));
    let call = Environment::for_call(
        &defining,
        &[name("a"), name("b")],
        &[Value::int(1), Value::int(2)],
    );
    assert_eq!(call.get("a"), Some(Value::int(1)));
    assert_eq!(call.get("b"), Some(Value::int(2)));
    assert_eq!(call.get("y"), Some(Value::int(10)));
    assert_eq!(call.depth(), 2);
    assert!(!defining.contains_local("a"));
}

#[test]
fn clear_releases_captured_scopes() {
    let global = Environment::new();
    let closure = FunctionValue::closure(vec![], Value::nil(), global.clone());
    global.set(name("f"), Value::function(closure));
    global.clear();
    assert!(!global.contains_local("f"));
    assert_eq!(global.get("f"), None);
}

#[test]
fn debug_does_not_recurse() {
    let global = Environment::new();
    let closure = FunctionValue::closure(vec![], Value::nil(), global.clone());
    global.set(name("f"), Value::function(closure));
    assert_eq!(
        format!("{global:?}"),
        "Environment { bindings: 1, depth: 1 }"
    );
}
