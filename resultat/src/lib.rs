//! A three-state outcome type for operations that may still be in flight.
//!
//! [`Outcome`] generalises [`Result`] with a first-class `Loading` state so a
//! producer can report "not finished yet" without wrapping everything in an
//! [`Option`] or carrying a separate flag. The type is a plain value: it never
//! schedules, polls, or blocks. Callers deliver successive outcomes through
//! whatever callback or channel they already use.
//!
//! ```
//! use resultat::{Fault, Outcome};
//!
//! fn describe(outcome: &Outcome<u32>) -> String {
//!     outcome.as_ref().fold(
//!         |value| format!("ready: {value}"),
//!         |fault| format!("error: {fault}"),
//!         || "loading".to_owned(),
//!     )
//! }
//!
//! assert_eq!(describe(&Outcome::loading()), "loading");
//! assert_eq!(describe(&Outcome::success(7)), "ready: 7");
//! assert_eq!(describe(&Outcome::failure(Fault::msg("offline"))), "error: offline");
//! ```
//!
//! Conversions to and from [`Result`] are explicit and named, because the
//! `Loading` state has no counterpart there:
//!
//! ```
//! use resultat::Outcome;
//!
//! let resolved: Outcome<u8, String> = Outcome::from_result(Ok(1));
//! assert_eq!(resolved.into_result(), Some(Ok(1)));
//! assert_eq!(Outcome::<u8, String>::loading().into_result(), None);
//! ```
//!
//! # Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` for [`Outcome`] and
//!   [`OutcomeError`].

mod catching;
mod error;
mod outcome;
mod result_ext;

pub use catching::Fatal;
pub use error::{Fault, OutcomeError};
pub use outcome::{LoadingPolicy, Outcome};
pub use result_ext::OutcomeResultExt;
