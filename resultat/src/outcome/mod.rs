//! The [`Outcome`] type together with its constructors and state predicates.
//!
//! Extraction, transformation, hooks and conversions live in the sibling
//! modules so that each group of combinators can be read on its own.

mod extract;
mod hooks;
mod interop;
mod transform;

use std::fmt;

use crate::Fault;

pub use transform::LoadingPolicy;

/// Result of an operation that has either succeeded, failed, or not yet
/// completed.
///
/// The error parameter defaults to [`Fault`], which is enough for most
/// producers. Any other error type can be used in its place; none of the
/// combinators require `E` to implement [`std::error::Error`].
///
/// # Examples
///
/// ```
/// use resultat::Outcome;
///
/// let pending: Outcome<&str, String> = Outcome::loading();
/// assert!(pending.is_loading());
///
/// let done = Outcome::<_, String>::success("OK");
/// assert_eq!(done.to_string(), "Success(OK)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be a `Failure` or `Loading` variant, which should be handled"]
pub enum Outcome<T, E = Fault> {
    /// The operation completed and produced a value.
    Success(T),
    /// The operation completed with an error.
    Failure(E),
    /// The operation has not completed yet.
    Loading,
}

impl<T, E> Outcome<T, E> {
    /// Wraps a completed value.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error reported by the operation.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns the pending marker.
    pub const fn loading() -> Self {
        Self::Loading
    }

    /// Runs `op` and captures its result.
    ///
    /// `Ok` becomes [`Outcome::Success`] and `Err` becomes
    /// [`Outcome::Failure`]. Panics raised by `op` are not caught; use
    /// [`Outcome::catch_unwind`] for that.
    ///
    /// # Examples
    ///
    /// ```
    /// use resultat::Outcome;
    ///
    /// let parsed = Outcome::run_catching(|| "42".parse::<u8>());
    /// assert_eq!(parsed, Outcome::Success(42));
    ///
    /// let broken = Outcome::run_catching(|| "x".parse::<u8>());
    /// assert!(broken.is_failure());
    /// ```
    pub fn run_catching<F>(op: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        Self::from_result(op())
    }

    /// Returns `true` for [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`Outcome::Failure`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` for [`Outcome::Loading`].
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// A fresh outcome knows nothing yet, so it starts as `Loading`.
impl<T, E> Default for Outcome<T, E> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T, E> fmt::Display for Outcome<T, E>
where
    T: fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({value})"),
            Self::Failure(error) => write!(f, "Failure({error})"),
            Self::Loading => f.write_str("Loading"),
        }
    }
}
