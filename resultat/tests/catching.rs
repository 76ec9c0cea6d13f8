//! Panic capture at the `catch_unwind` boundary.

use std::panic;

use resultat::{Fatal, Fault, Outcome};

#[test]
fn normal_return_is_success() {
    let outcome: Outcome<u32> = Outcome::catch_unwind(|| 7);
    assert_eq!(outcome, Outcome::Success(7));
}

#[test]
fn ordinary_panic_becomes_failure() {
    let outcome: Outcome<u32> = Outcome::catch_unwind(|| panic!("boom"));
    assert_eq!(
        outcome,
        Outcome::Failure(Fault::Panicked {
            message: "boom".to_owned()
        })
    );
}

#[test]
fn formatted_panic_message_is_kept() {
    let id = 5;
    let outcome: Outcome<u32> =
        Outcome::catch_unwind(move || panic!("Unknown customer with ID: {id}"));
    let fault = outcome.err();
    assert!(fault.as_ref().is_some_and(Fault::is_panic));
    assert_eq!(
        fault.as_ref().map(Fault::message),
        Some("Unknown customer with ID: 5")
    );
}

#[test]
#[expect(clippy::expect_used, reason = "test panics are acceptable")]
fn fatal_panic_is_resumed() {
    let escaped = panic::catch_unwind(|| {
        Outcome::<u32>::catch_unwind(|| Fatal::new("state corrupted").raise())
    });
    let payload = escaped.expect_err("fatal panics must escape the boundary");
    let fatal = payload.downcast_ref::<Fatal>();
    assert_eq!(fatal.map(Fatal::reason), Some("state corrupted"));
    assert_eq!(
        fatal.map(ToString::to_string).as_deref(),
        Some("fatal: state corrupted")
    );
}

/// Error type that can absorb faults, showing `catch_unwind` is not tied to
/// the default error parameter.
#[derive(Debug)]
enum AppError {
    Crashed(String),
}

impl From<Fault> for AppError {
    fn from(fault: Fault) -> Self {
        Self::Crashed(fault.message().to_owned())
    }
}

#[test]
fn custom_error_types_receive_the_fault() {
    let outcome: Outcome<u32, AppError> = Outcome::catch_unwind(|| panic!("worker died"));
    match outcome {
        Outcome::Failure(AppError::Crashed(message)) => assert_eq!(message, "worker died"),
        other => panic!("expected a crashed failure, got {other:?}"),
    }
}
