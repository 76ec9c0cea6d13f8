//! Getting values and errors back out of an [`Outcome`].

use std::fmt;

use super::Outcome;
use crate::OutcomeError;

impl<T, E> Outcome<T, E> {
    /// Returns the value, or says why there is none.
    ///
    /// A domain failure and a premature read are reported as different
    /// [`OutcomeError`] variants so callers can tell them apart.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::Failed`] carrying the wrapped error for
    /// [`Outcome::Failure`], and [`OutcomeError::Loading`] for
    /// [`Outcome::Loading`].
    ///
    /// # Examples
    ///
    /// ```
    /// use resultat::{Outcome, OutcomeError};
    ///
    /// assert_eq!(Outcome::<u8, &str>::success(3).value(), Ok(3));
    /// assert_eq!(Outcome::<u8, &str>::failure("F").value(), Err(OutcomeError::Failed("F")));
    /// assert_eq!(Outcome::<u8, &str>::loading().value(), Err(OutcomeError::Loading));
    /// ```
    pub fn value(self) -> Result<T, OutcomeError<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(OutcomeError::Failed(error)),
            Self::Loading => Err(OutcomeError::Loading),
        }
    }

    /// Returns the value if the outcome succeeded.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) | Self::Loading => None,
        }
    }

    /// Returns the error if the outcome failed.
    #[must_use]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) | Self::Loading => None,
        }
    }

    /// Returns the value, or `default` for failures and pending outcomes.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) | Self::Loading => default,
        }
    }

    /// Returns the value, or `T::default()` for failures and pending outcomes.
    #[must_use]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Returns the value, or computes one from the error.
    ///
    /// `fallback` receives `Some(error)` for a failure and `None` while the
    /// outcome is still loading. A panic inside `fallback` is not caught.
    ///
    /// # Examples
    ///
    /// ```
    /// use resultat::{Fault, Outcome};
    ///
    /// let failed: Outcome<String> = Outcome::failure(Fault::msg("F"));
    /// let text = failed.unwrap_or_else(|fault| {
    ///     format!("EX:{}", fault.as_ref().map_or("", Fault::message))
    /// });
    /// assert_eq!(text, "EX:F");
    ///
    /// let pending: Outcome<&str> = Outcome::loading();
    /// assert_eq!(pending.unwrap_or_else(|_| "L"), "L");
    /// ```
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(Option<E>) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(Some(error)),
            Self::Loading => fallback(None),
        }
    }

    /// Returns the value, panicking otherwise.
    ///
    /// # Panics
    ///
    /// Panics with the error's `Debug` form for a failure, and with a message
    /// naming the `Loading` state for a pending outcome.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("called `Outcome::unwrap()` on a `Failure` value: {error:?}")
            }
            Self::Loading => panic!("called `Outcome::unwrap()` on a `Loading` value"),
        }
    }

    /// Returns the value, panicking with `msg` otherwise.
    ///
    /// # Panics
    ///
    /// Panics with `msg` followed by the error's `Debug` form for a failure,
    /// or by a note that the outcome is still loading.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("{msg}: {error:?}"),
            Self::Loading => panic!("{msg}: outcome is still loading"),
        }
    }

    /// Borrows the payload without consuming the outcome.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
            Self::Loading => Outcome::Loading,
        }
    }

    /// Mutably borrows the payload without consuming the outcome.
    pub const fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
            Self::Loading => Outcome::Loading,
        }
    }
}
