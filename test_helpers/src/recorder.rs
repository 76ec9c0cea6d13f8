//! Records which side-effect hook fired for each observed outcome.
//!
//! The recorder is cheap to clone and every clone appends to the same log,
//! so it can be moved into producer threads or callbacks.

use std::{fmt, sync::Arc};

use parking_lot::Mutex;
use resultat::Outcome;

/// A single hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hook {
    /// `on_success` ran with a value rendered through `Display`.
    Success(String),
    /// `on_failure` ran with an error rendered through `Display`.
    Failure(String),
    /// `on_loading` ran.
    Loading,
}

/// Shared log of hook invocations.
#[derive(Debug, Clone, Default)]
pub struct HookRecorder {
    hooks: Arc<Mutex<Vec<Hook>>>,
}

impl HookRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches all three hooks to `outcome` and returns whatever the chain
    /// hands back.
    pub fn observe<T, E>(&self, outcome: Outcome<T, E>) -> Outcome<T, E>
    where
        T: fmt::Display,
        E: fmt::Display,
    {
        outcome
            .on_success(|value| self.push(Hook::Success(value.to_string())))
            .on_failure(|error| self.push(Hook::Failure(error.to_string())))
            .on_loading(|| self.push(Hook::Loading))
    }

    /// Appends a hook to the log.
    pub fn push(&self, hook: Hook) {
        self.hooks.lock().push(hook);
    }

    /// Snapshot of the log so far.
    #[must_use]
    pub fn hooks(&self) -> Vec<Hook> {
        self.hooks.lock().clone()
    }

    /// Number of `(success, failure, loading)` invocations.
    #[must_use]
    pub fn counts(&self) -> (usize, usize, usize) {
        self.hooks
            .lock()
            .iter()
            .fold((0, 0, 0), |(s, f, l), hook| match hook {
                Hook::Success(_) => (s + 1, f, l),
                Hook::Failure(_) => (s, f + 1, l),
                Hook::Loading => (s, f, l + 1),
            })
    }
}
