//! Unit tests for fault construction, comparison and extraction errors.

use std::{any::Any, error::Error as _, io, panic, sync::Arc};

use rstest::rstest;

use super::{Fault, OutcomeError};

#[rstest]
#[case::message(Fault::msg("F"), "F", "F")]
#[case::wrapped(Fault::wrap("read failed", io::Error::other("eof")), "read failed", "read failed")]
#[case::panicked(Fault::Panicked { message: "boom".into() }, "boom", "panicked: boom")]
fn message_and_display(#[case] fault: Fault, #[case] message: &str, #[case] display: &str) {
    assert_eq!(fault.message(), message);
    assert_eq!(fault.to_string(), display);
}

#[test]
fn wrapped_fault_exposes_source() {
    let fault = Fault::wrap("read failed", io::Error::other("eof"));
    let source = fault.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("eof"));
    assert!(Fault::msg("plain").source().is_none());
}

#[test]
fn from_error_reuses_display() {
    let fault = Fault::from_error(io::Error::other("disk full"));
    assert_eq!(fault.message(), "disk full");
    assert!(matches!(fault, Fault::Wrapped { .. }));
}

#[test]
fn boxed_errors_convert_into_wrapped_faults() {
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(io::Error::other("gone"));
    let fault = Fault::from(boxed);
    assert_eq!(fault.message(), "gone");
    assert!(fault.source().is_some());
}

#[test]
fn equality_is_structural() {
    assert_eq!(Fault::msg("F"), Fault::from("F"));
    assert_eq!(Fault::msg("F"), Fault::from(String::from("F")));
    assert_ne!(Fault::msg("F"), Fault::Panicked { message: "F".into() });
    assert_eq!(
        Fault::wrap("x", io::Error::other("a")),
        Fault::wrap("x", io::Error::other("a"))
    );
    assert_ne!(
        Fault::wrap("x", io::Error::other("a")),
        Fault::wrap("x", io::Error::other("b"))
    );
}

#[test]
fn clones_share_the_source() {
    let fault = Fault::wrap("x", io::Error::other("a"));
    let copy = fault.clone();
    assert_eq!(fault, copy);
    match (&fault, &copy) {
        (Fault::Wrapped { source: a, .. }, Fault::Wrapped { source: b, .. }) => {
            assert!(Arc::ptr_eq(a, b));
        }
        other => panic!("expected wrapped faults, got {other:?}"),
    }
}

#[test]
fn panicked_reads_common_payloads() {
    let payloads: [(Box<dyn Any + Send>, &str); 3] = [
        (Box::new("boom"), "boom"),
        (Box::new(String::from("kaboom")), "kaboom"),
        (Box::new(17_u8), "unknown panic"),
    ];
    for (payload, expected) in payloads {
        let fault = Fault::panicked(&*payload);
        assert!(fault.is_panic());
        assert_eq!(fault.message(), expected);
    }
}

fn explode() -> u8 {
    panic!("from {}", "format")
}

#[test]
#[expect(clippy::expect_used, reason = "test panics are acceptable")]
fn panicked_reads_real_panic_payload() {
    let payload = panic::catch_unwind(explode).expect_err("explode always panics");
    assert_eq!(Fault::panicked(&*payload).message(), "from format");
}

#[test]
fn outcome_error_kinds() {
    let failed: OutcomeError<Fault> = OutcomeError::Failed(Fault::msg("F"));
    assert!(!failed.is_loading());
    assert_eq!(failed.to_string(), "outcome failed: F");
    assert_eq!(failed.into_failure(), Some(Fault::msg("F")));

    let pending: OutcomeError<Fault> = OutcomeError::Loading;
    assert!(pending.is_loading());
    assert!(pending.to_string().contains("still loading"));
    assert_eq!(pending.into_failure(), None);
}
