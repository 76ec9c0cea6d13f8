//! Conversions between [`Outcome`] and the standard two-state types.
//!
//! [`Result`] has no pending state, so converting an outcome into one is
//! lossy and returns an [`Option`]: `None` stands for `Loading`. The reverse
//! direction never yields `Loading`. [`Poll`] does have a pending state and
//! therefore converts losslessly in both directions.

use std::task::Poll;

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Converts a completed [`Result`] into an outcome.
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Converts into a [`Result`], or `None` while still loading.
    ///
    /// # Examples
    ///
    /// ```
    /// use resultat::Outcome;
    ///
    /// let ok: Outcome<&str, u8> = Outcome::success("Hello");
    /// assert_eq!(ok.into_result(), Some(Ok("Hello")));
    ///
    /// let pending: Outcome<&str, u8> = Outcome::loading();
    /// assert_eq!(pending.into_result(), None);
    /// ```
    #[must_use]
    pub fn into_result(self) -> Option<Result<T, E>> {
        match self {
            Self::Success(value) => Some(Ok(value)),
            Self::Failure(error) => Some(Err(error)),
            Self::Loading => None,
        }
    }

    /// Converts into a [`Poll`], mapping `Loading` to [`Poll::Pending`].
    pub fn into_poll(self) -> Poll<Result<T, E>> {
        self.into_result().map_or(Poll::Pending, Poll::Ready)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

/// `None` becomes `Loading`; this is the inverse of [`Outcome::into_result`].
impl<T, E> From<Option<Result<T, E>>> for Outcome<T, E> {
    fn from(resolved: Option<Result<T, E>>) -> Self {
        resolved.map_or(Self::Loading, Self::from_result)
    }
}

impl<T, E> From<Poll<Result<T, E>>> for Outcome<T, E> {
    fn from(poll: Poll<Result<T, E>>) -> Self {
        match poll {
            Poll::Ready(result) => Self::from_result(result),
            Poll::Pending => Self::Loading,
        }
    }
}
