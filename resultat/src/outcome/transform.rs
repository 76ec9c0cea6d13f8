//! Combinators that derive a new [`Outcome`] (or a plain value) from an
//! existing one.
//!
//! The plain forms never intercept anything raised by the supplied closure.
//! The `_catching` forms accept closures returning [`Result`] and turn an
//! `Err` into [`Outcome::Failure`].

use super::Outcome;

/// Whether [`Outcome::recover_with`] also replaces a pending outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LoadingPolicy {
    /// Leave `Loading` untouched; only failures are recovered.
    #[default]
    Keep,
    /// Treat `Loading` like a failure without an error and recover it too.
    Recover,
}

impl<T, E> Outcome<T, E> {
    /// Transforms a successful value, passing failures and pending outcomes
    /// through unchanged.
    pub fn map<R, F>(self, transform: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(error) => Outcome::Failure(error),
            Self::Loading => Outcome::Loading,
        }
    }

    /// Like [`Outcome::map`], but an `Err` returned by `transform` becomes a
    /// new failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use resultat::Outcome;
    ///
    /// let text: Outcome<&str, std::num::ParseIntError> = Outcome::success("nope");
    /// assert!(text.map_catching(str::parse::<u32>).is_failure());
    /// ```
    pub fn map_catching<R, F>(self, transform: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Result<R, E>,
    {
        match self {
            Self::Success(value) => Outcome::from_result(transform(value)),
            Self::Failure(error) => Outcome::Failure(error),
            Self::Loading => Outcome::Loading,
        }
    }

    /// Transforms the error of a failure, leaving other variants unchanged.
    pub fn map_err<F2, F>(self, transform: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(transform(error)),
            Self::Loading => Outcome::Loading,
        }
    }

    /// Chains another outcome-producing step after a success.
    pub fn and_then<R, F>(self, next: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Outcome<R, E>,
    {
        match self {
            Self::Success(value) => next(value),
            Self::Failure(error) => Outcome::Failure(error),
            Self::Loading => Outcome::Loading,
        }
    }

    /// Turns a failure into a success computed from its error.
    ///
    /// Successes and pending outcomes are returned unchanged. Use
    /// [`Outcome::recover_with`] to substitute a value while loading.
    pub fn recover<F>(self, transform: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Failure(error) => Self::Success(transform(error)),
            other => other,
        }
    }

    /// Turns a failure, and optionally a pending outcome, into a success.
    ///
    /// `transform` receives `Some(error)` for a failure. With
    /// [`LoadingPolicy::Recover`] it is also called with `None` for
    /// `Loading`, which lets callers show a placeholder until the real value
    /// arrives.
    ///
    /// # Examples
    ///
    /// ```
    /// use resultat::{LoadingPolicy, Outcome};
    ///
    /// let pending: Outcome<u32> = Outcome::loading();
    /// assert!(pending.clone().recover_with(LoadingPolicy::Keep, |_| 42).is_loading());
    /// assert_eq!(pending.recover_with(LoadingPolicy::Recover, |_| 42), Outcome::Success(42));
    /// ```
    pub fn recover_with<F>(self, loading: LoadingPolicy, transform: F) -> Self
    where
        F: FnOnce(Option<E>) -> T,
    {
        match (self, loading) {
            (Self::Failure(error), _) => Self::Success(transform(Some(error))),
            (Self::Loading, LoadingPolicy::Recover) => Self::Success(transform(None)),
            (other, _) => other,
        }
    }

    /// Like [`Outcome::recover`], but an `Err` returned by `transform`
    /// becomes a new failure.
    pub fn recover_catching<F>(self, transform: F) -> Self
    where
        F: FnOnce(E) -> Result<T, E>,
    {
        match self {
            Self::Failure(error) => Self::from_result(transform(error)),
            other => other,
        }
    }

    /// Like [`Outcome::recover_with`], but an `Err` returned by `transform`
    /// becomes a new failure.
    pub fn recover_catching_with<F>(self, loading: LoadingPolicy, transform: F) -> Self
    where
        F: FnOnce(Option<E>) -> Result<T, E>,
    {
        match (self, loading) {
            (Self::Failure(error), _) => Self::from_result(transform(Some(error))),
            (Self::Loading, LoadingPolicy::Recover) => Self::from_result(transform(None)),
            (other, _) => other,
        }
    }

    /// Collapses the outcome into a single value by running exactly one of
    /// the three branches.
    ///
    /// # Examples
    ///
    /// ```
    /// use resultat::Outcome;
    ///
    /// let ok: Outcome<&str, String> = Outcome::success("OK");
    /// let folded = ok.fold(|v| format!("V:{v}"), |e| format!("EX:{e}"), || "L".to_owned());
    /// assert_eq!(folded, "V:OK");
    /// ```
    pub fn fold<R, S, F, L>(self, on_success: S, on_failure: F, on_loading: L) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
        L: FnOnce() -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
            Self::Loading => on_loading(),
        }
    }
}
