//! Tests for StdoutGuard.

use crate::error::ConfigurationError;
use crate::io::StdoutGuard;

#[test]
fn first_bind_succeeds() {
    let mut guard = StdoutGuard::new();
    assert!(!guard.is_bound());

    guard.bind("pretty").unwrap();
    assert!(guard.is_bound());
    assert_eq!(guard.bound_count(), 1);
    assert_eq!(guard.bound_spec(), Some("pretty"));
}

#[test]
fn second_bind_fails_whoever_asks() {
    let mut guard = StdoutGuard::new();
    guard.bind("pretty").unwrap();

    for requester in ["pretty", "usage", "my.Plugin"] {
        let err = guard.bind(requester).unwrap_err();
        match err {
            ConfigurationError::StdoutInUse { bound_spec } => {
                assert_eq!(bound_spec.as_deref(), Some("pretty"))
            }
            other => panic!("expected StdoutInUse, got: {other:?}"),
        }
    }

    // Failed binds leave the state alone.
    assert_eq!(guard.bound_count(), 1);
    assert_eq!(guard.bound_spec(), Some("pretty"));
}

#[test]
fn guards_are_independent() {
    let mut a = StdoutGuard::new();
    let mut b = StdoutGuard::new();
    a.bind("pretty").unwrap();
    b.bind("pretty").unwrap();
}
