use super::*;
use crate::silent_handler;

#[test]
#[cfg(not(target_arch = "wasm32"))]
fn native_default_has_no_depth_limit() {
    let config = EvalConfig::default();
    assert_eq!(config.max_call_depth, None);
    assert_eq!(
        format!("{config:?}"),
        "EvalConfig { max_call_depth: None, print: \"stdout\" }"
    );
}

#[test]
fn builder_overrides() {
    let config = EvalConfig::default()
        .max_call_depth(Some(10))
        .print_handler(silent_handler());
    assert_eq!(config.max_call_depth, Some(10));
    assert!(matches!(*config.print, crate::PrintHandlerImpl::Silent));
}
