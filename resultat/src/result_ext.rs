//! Extension for turning a foreign `Result` into an [`Outcome`] in one call.
//!
//! [`Outcome::from_result`] keeps the error type as it is. When the error
//! should become the crate's default [`Fault`] instead, use
//! [`OutcomeResultExt::into_outcome`] rather than spelling out
//! `.map_err(Fault::from)` first.
//!
//! # Examples
//!
//! ```
//! use resultat::{Fault, Outcome, OutcomeResultExt};
//!
//! let read: Result<u8, String> = Err("offline".to_owned());
//! let outcome: Outcome<u8> = read.into_outcome();
//! assert_eq!(outcome, Outcome::Failure(Fault::msg("offline")));
//! ```

use crate::{Fault, Outcome};

/// Converts `Result<T, E>` into `Outcome<T, Fault>` when `E: Into<Fault>`.
pub trait OutcomeResultExt<T, E> {
    /// Maps `Ok` to `Success` and `Err` to a `Failure` holding the converted
    /// error. Never produces `Loading`.
    fn into_outcome(self) -> Outcome<T, Fault>;
}

impl<T, E> OutcomeResultExt<T, E> for Result<T, E>
where
    E: Into<Fault>,
{
    fn into_outcome(self) -> Outcome<T, Fault> {
        Outcome::from_result(self.map_err(Into::into))
    }
}
