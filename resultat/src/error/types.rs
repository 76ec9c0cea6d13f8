//! Error returned when a value is requested from an outcome that has none.

use thiserror::Error;

/// Why [`crate::Outcome::value`] could not produce a value.
///
/// `Failed` re-raises the domain error of a failed outcome. `Loading` marks a
/// programming error: the value was read before the operation completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutcomeError<E> {
    /// The outcome holds a failure.
    #[error("outcome failed: {0}")]
    Failed(E),

    /// The outcome has not resolved yet.
    #[error("value requested while the outcome is still loading")]
    Loading,
}

impl<E> OutcomeError<E> {
    /// Returns `true` when the value was requested too early.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the domain error, if there is one.
    #[must_use]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Failed(error) => Some(error),
            Self::Loading => None,
        }
    }
}
