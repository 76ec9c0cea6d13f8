//! Side-effect hooks that observe an [`Outcome`] and hand it back unchanged.
//!
//! ```
//! use resultat::Outcome;
//!
//! let mut log = Vec::new();
//! let outcome: Outcome<u32, String> = Outcome::failure("offline".into());
//! let same = outcome
//!     .clone()
//!     .on_loading(|| log.push("loading".to_owned()))
//!     .on_failure(|error| log.push(format!("error: {error}")))
//!     .on_success(|value| log.push(format!("value: {value}")));
//!
//! assert_eq!(same, outcome);
//! assert_eq!(log, ["error: offline"]);
//! ```

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Calls `action` with the value when the outcome succeeded.
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Calls `action` with the error when the outcome failed.
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Calls `action` while the outcome is still loading.
    pub fn on_loading<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_loading() {
            action();
        }
        self
    }
}
