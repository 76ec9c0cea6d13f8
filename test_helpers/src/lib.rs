//! Test helpers shared across crates.
//!
//! This crate provides a fixture error type, assertion suites covering every
//! query on a single outcome, and a recorder for side-effect hooks.

pub mod checks;
pub mod fixtures;
pub mod recorder;

pub use checks::{Sentinel, check_failure, check_loading, check_success};
pub use fixtures::{CustomError, Probe, fail};
pub use recorder::{Hook, HookRecorder};
