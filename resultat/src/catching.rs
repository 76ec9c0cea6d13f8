//! Panic-capturing boundary for closures that report errors by panicking.
//!
//! Ordinary panics become [`Fault::Panicked`] failures. A panic carrying a
//! [`Fatal`] payload is resumed untouched, so code can mark conditions that
//! must never be folded into a domain failure. Aborting panics and
//! allocation failures terminate the process before reaching this boundary.

use std::{
    borrow::Cow,
    fmt,
    panic::{self, UnwindSafe},
};

use crate::{Fault, Outcome};

/// Panic payload that [`Outcome::catch_unwind`] always lets through.
///
/// # Examples
///
/// ```
/// use resultat::{Fatal, Outcome};
///
/// let escaped = std::panic::catch_unwind(|| {
///     Outcome::<()>::catch_unwind(|| Fatal::new("corrupted state").raise())
/// });
/// let payload = escaped.unwrap_err();
/// assert_eq!(payload.downcast_ref::<Fatal>().map(Fatal::reason), Some("corrupted state"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fatal {
    reason: Cow<'static, str>,
}

impl Fatal {
    /// Creates a fatal payload with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Why the condition is fatal.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Unwinds with `self` as the panic payload.
    ///
    /// # Panics
    ///
    /// Always, with `self` as the payload.
    pub fn raise(self) -> ! {
        panic::panic_any(self)
    }
}

impl fmt::Display for Fatal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fatal: {}", self.reason)
    }
}

impl<T, E> Outcome<T, E>
where
    E: From<Fault>,
{
    /// Runs `op`, turning an ordinary panic into a failure.
    ///
    /// # Panics
    ///
    /// Resumes the unwind when the panic payload is a [`Fatal`].
    ///
    /// # Examples
    ///
    /// ```
    /// use resultat::{Fault, Outcome};
    ///
    /// let outcome: Outcome<u32> = Outcome::catch_unwind(|| panic!("boom"));
    /// assert_eq!(outcome.err().as_ref().map(Fault::message), Some("boom"));
    /// ```
    pub fn catch_unwind<F>(op: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(op) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                if let Some(fatal) = payload.downcast_ref::<Fatal>() {
                    tracing::warn!(reason = %fatal.reason(), "resuming fatal panic");
                    panic::resume_unwind(payload);
                }
                let fault = Fault::panicked(&*payload);
                tracing::debug!(panic = %fault.message(), "captured panic as failure");
                Self::Failure(fault.into())
            }
        }
    }
}
