//! Fixture error type and constructors for outcome tests.

use resultat::Outcome;
use thiserror::Error;

/// Error raised by test closures.
///
/// The `Display` form is prefixed so tests can check that the error itself,
/// not just its message, was rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("CustomError: {message}")]
pub struct CustomError {
    /// Message supplied at construction.
    pub message: String,
}

impl CustomError {
    /// Creates an error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome type used throughout the shared checks.
pub type Probe<T> = Outcome<T, CustomError>;

/// Returns `Err(CustomError)`, standing in for a closure that fails.
///
/// # Errors
///
/// Always returns [`CustomError`] with `message`.
pub fn fail<T>(message: &str) -> Result<T, CustomError> {
    Err(CustomError::new(message))
}

#[cfg(test)]
mod tests {
    use super::{CustomError, fail};

    #[test]
    fn display_is_prefixed() {
        assert_eq!(CustomError::new("F").to_string(), "CustomError: F");
    }

    #[test]
    fn fail_always_errs() {
        assert_eq!(fail::<()>("F"), Err(CustomError::new("F")));
    }
}
