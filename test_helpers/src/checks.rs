//! Assertion suites that exercise every query on a single outcome.
//!
//! Each check runs the predicates, all extraction forms, `fold`, `Display`
//! and the three hooks against one outcome, panicking on the first mismatch.

use std::fmt;

use resultat::{Outcome, OutcomeError};

use crate::{CustomError, Hook, HookRecorder};

/// Fallback value that the outcomes under test never hold.
pub trait Sentinel {
    /// Returns the sentinel.
    fn sentinel() -> Self;
}

impl Sentinel for i32 {
    fn sentinel() -> Self {
        Self::MIN
    }
}

impl Sentinel for u32 {
    fn sentinel() -> Self {
        Self::MAX
    }
}

impl Sentinel for String {
    fn sentinel() -> Self {
        "<sentinel>".to_owned()
    }
}

/// Renders an outcome through `fold` using the `V:`/`EX:`/`L` convention.
fn render<T: fmt::Display>(outcome: Outcome<T, CustomError>) -> String {
    outcome.fold(|v| format!("V:{v}"), |e| format!("EX:{e}"), || "L".to_owned())
}

fn check_hooks<T>(outcome: &Outcome<T, CustomError>, expected: &[Hook])
where
    T: Clone + fmt::Debug + fmt::Display + PartialEq,
{
    let recorder = HookRecorder::new();
    let returned = recorder.observe(outcome.clone());
    assert_eq!(&returned, outcome, "hooks must hand back the same outcome");
    assert_eq!(recorder.hooks(), expected);
}

/// Asserts that `outcome` is a success holding `expected`.
///
/// # Panics
///
/// Panics when any query disagrees with a success holding `expected`.
pub fn check_success<T>(outcome: &Outcome<T, CustomError>, expected: &T)
where
    T: Clone + Sentinel + fmt::Debug + fmt::Display + PartialEq,
{
    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert!(!outcome.is_loading());
    assert_eq!(outcome.clone().value().as_ref(), Ok(expected));
    assert_eq!(outcome.clone().ok().as_ref(), Some(expected));
    assert_eq!(&outcome.clone().unwrap_or(T::sentinel()), expected);
    assert_eq!(
        &outcome
            .clone()
            .unwrap_or_else(|_| panic!("fallback must not run for a success")),
        expected
    );
    assert_eq!(render(outcome.clone()), format!("V:{expected}"));
    assert_eq!(outcome.clone().err(), None);
    assert_eq!(outcome.to_string(), format!("Success({expected})"));
    check_hooks(outcome, &[Hook::Success(expected.to_string())]);
}

/// Asserts that `outcome` is a failure whose [`CustomError`] carries
/// `message`.
///
/// # Panics
///
/// Panics when any query disagrees with such a failure.
pub fn check_failure<T>(outcome: &Outcome<T, CustomError>, message: &str)
where
    T: Clone + Sentinel + fmt::Debug + fmt::Display + PartialEq,
{
    let error = CustomError::new(message);
    let rendered = format!("EX:{error}");
    assert!(!outcome.is_success());
    assert!(outcome.is_failure());
    assert!(!outcome.is_loading());
    assert_eq!(
        outcome.clone().value(),
        Err(OutcomeError::Failed(error.clone()))
    );
    assert_eq!(outcome.clone().ok(), None);
    assert_eq!(outcome.clone().unwrap_or(T::sentinel()), T::sentinel());
    let fallback = outcome
        .clone()
        .map(|v| format!("V:{v}"))
        .unwrap_or_else(|seen| {
            seen.map_or_else(|| "missing error".to_owned(), |e| format!("EX:{e}"))
        });
    assert_eq!(fallback, rendered);
    assert_eq!(render(outcome.clone()), rendered);
    assert_eq!(
        outcome.clone().err().map(|e| e.message),
        Some(message.to_owned())
    );
    assert_eq!(outcome.to_string(), format!("Failure({error})"));
    check_hooks(outcome, &[Hook::Failure(error.to_string())]);
}

/// Asserts that `outcome` is still loading.
///
/// # Panics
///
/// Panics when any query disagrees with a pending outcome.
pub fn check_loading<T>(outcome: &Outcome<T, CustomError>)
where
    T: Clone + Sentinel + fmt::Debug + fmt::Display + PartialEq,
{
    assert!(!outcome.is_success());
    assert!(!outcome.is_failure());
    assert!(outcome.is_loading());
    assert_eq!(outcome.clone().value(), Err(OutcomeError::Loading));
    assert_eq!(outcome.clone().ok(), None);
    assert_eq!(outcome.clone().unwrap_or(T::sentinel()), T::sentinel());
    let fallback = outcome
        .clone()
        .map(|v| format!("V:{v}"))
        .unwrap_or_else(|seen| seen.map_or_else(|| "L".to_owned(), |e| format!("EX:{e}")));
    assert_eq!(fallback, "L");
    assert_eq!(render(outcome.clone()), "L");
    assert_eq!(outcome.clone().err(), None);
    assert_eq!(outcome.to_string(), "Loading");
    check_hooks(outcome, &[Hook::Loading]);
}
