//! Error types used alongside [`crate::Outcome`].
//!
//! [`Fault`] is the default error payload of a failed outcome.
//! [`OutcomeError`] is what fallible extraction returns, keeping domain
//! failures apart from reads that happened before the outcome resolved.

mod fault;
mod types;

pub use fault::Fault;
pub use types::OutcomeError;

#[cfg(test)]
mod tests;
