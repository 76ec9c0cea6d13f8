//! Default error payload for failed outcomes.

use std::{any::Any, error::Error as StdError, sync::Arc};

use thiserror::Error;

/// Error carried by [`crate::Outcome::Failure`] unless the caller picks
/// another type.
///
/// Every variant exposes a human-readable [`message`](Fault::message) and
/// renders it through `Display`. Sources are held in an [`Arc`] so a
/// `Fault` stays cheap to clone alongside the outcome that owns it.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum Fault {
    /// A failure described only by its message.
    #[error("{message}")]
    Message {
        /// Human-readable description of the failure.
        message: String,
    },

    /// A failure caused by another error.
    #[error("{message}")]
    Wrapped {
        /// Human-readable description of the failure.
        message: String,
        /// Underlying error that triggered the failure.
        #[source]
        source: Arc<dyn StdError + Send + Sync>,
    },

    /// A panic captured by [`crate::Outcome::catch_unwind`].
    #[error("panicked: {message}")]
    Panicked {
        /// Message extracted from the panic payload.
        message: String,
    },
}

impl Fault {
    /// Builds a fault from a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use resultat::Fault;
    ///
    /// let fault = Fault::msg("disk full");
    /// assert_eq!(fault.message(), "disk full");
    /// assert_eq!(fault.to_string(), "disk full");
    /// ```
    #[must_use]
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }

    /// Builds a fault that records `source` as its cause.
    #[must_use]
    pub fn wrap<S>(message: impl Into<String>, source: S) -> Self
    where
        S: StdError + Send + Sync + 'static,
    {
        Self::Wrapped {
            message: message.into(),
            source: Arc::new(source),
        }
    }

    /// Builds a fault from another error, reusing its `Display` output as
    /// the message.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::error::Error as _;
    /// use resultat::Fault;
    ///
    /// let parse = "x".parse::<u8>().unwrap_err();
    /// let fault = Fault::from_error(parse);
    /// assert_eq!(fault.message(), "invalid digit found in string");
    /// assert!(fault.source().is_some());
    /// ```
    #[must_use]
    pub fn from_error<S>(source: S) -> Self
    where
        S: StdError + Send + Sync + 'static,
    {
        let message = source.to_string();
        Self::wrap(message, source)
    }

    /// Builds a fault from a panic payload as returned by
    /// [`std::panic::catch_unwind`].
    #[must_use]
    pub fn panicked(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_owned());
        Self::Panicked { message }
    }

    /// Human-readable description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Message { message }
            | Self::Wrapped { message, .. }
            | Self::Panicked { message } => message,
        }
    }

    /// Returns `true` if the fault was produced from a captured panic.
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }
}

/// Faults compare by kind and message; wrapped sources compare by their
/// rendered text since `dyn Error` has no equality of its own.
impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Message { message: a }, Self::Message { message: b })
            | (Self::Panicked { message: a }, Self::Panicked { message: b }) => a == b,
            (
                Self::Wrapped {
                    message: a,
                    source: sa,
                },
                Self::Wrapped {
                    message: b,
                    source: sb,
                },
            ) => a == b && sa.to_string() == sb.to_string(),
            _ => false,
        }
    }
}

impl Eq for Fault {}

impl From<&str> for Fault {
    fn from(message: &str) -> Self {
        Self::msg(message)
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Self::msg(message)
    }
}

impl From<Box<dyn StdError + Send + Sync>> for Fault {
    fn from(source: Box<dyn StdError + Send + Sync>) -> Self {
        Self::Wrapped {
            message: source.to_string(),
            source: Arc::from(source),
        }
    }
}
