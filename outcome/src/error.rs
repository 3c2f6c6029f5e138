//! Error support for failure payloads.

use thiserror::Error;

/// A minimal error-like value: an error that is nothing but its message.
///
/// The failure constructors accept any [`std::error::Error`]; this type
/// covers the common case where the failure reason is a plain
/// human-readable message with no richer structure.
///
/// # Examples
///
/// ```
/// use outcome::{MessageError, Outcome};
///
/// let outcome: Outcome<(), MessageError> =
///     Outcome::failure(MessageError::new("boom"));
/// assert_eq!(outcome.error().map(MessageError::message), Some("boom"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MessageError {
    message: String,
}

impl MessageError {
    /// Creates an error from any message-shaped input.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable message this error carries.
    #[must_use]
    pub const fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl From<&str> for MessageError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for MessageError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
