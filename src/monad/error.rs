//! Error types for the monad module.
//!
//! This module provides the error type produced when a panicking call is
//! translated into a [`ResultValue::Failure`](super::ResultValue::Failure)
//! by [`ResultValue::catch`](super::ResultValue::catch).

use std::any::Any;

/// A panic captured at the `catch` boundary.
///
/// The panic payload is downcast to a string when possible. Payloads that are
/// neither `&str` nor `String` are reported as `"non-string panic payload"`.
///
/// # Examples
///
/// ```rust
/// use monadic_iter::monad::CaughtPanic;
///
/// let error = CaughtPanic::new("division by zero");
/// assert_eq!(format!("{error}"), "caught panic: division by zero");
/// assert_eq!(error.message(), "division by zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaughtPanic {
    message: String,
}

impl CaughtPanic {
    /// Creates a captured panic from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self { message }
    }

    /// Returns the captured panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for CaughtPanic {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "caught panic: {}", self.message)
    }
}

impl std::error::Error for CaughtPanic {}
