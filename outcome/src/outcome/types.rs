//! The explicitly-discriminated outcome encoding.

use std::error::Error;

/// A computation's result: either the value it produced or the error that
/// stopped it.
///
/// The enum discriminant is the single source of truth for which branch is
/// active. Payload shape plays no part in classification, so a success
/// whose value happens to be an error type is still a success.
///
/// # Examples
///
/// ```
/// use outcome::{MessageError, Outcome};
///
/// let fine: Outcome<&str, MessageError> = Outcome::success("ok");
/// let broken: Outcome<&str, MessageError> =
///     Outcome::failure(MessageError::new("boom"));
///
/// assert!(fine.is_success());
/// assert!(broken.is_failure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a computed value in the success branch.
    ///
    /// Accepts any `T`, including types that are themselves error-like; the
    /// failure parameter stays free at the call site and unifies with
    /// whatever error type the surrounding code requires.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a failure reason in the failure branch.
    ///
    /// The payload must be error-like: the [`Error`] bound guarantees at
    /// minimum a human-readable message through `Display`.
    #[must_use]
    pub const fn failure(error: E) -> Self
    where
        E: Error,
    {
        Self::Failure(error)
    }

    /// Returns `true` when the success branch is active.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` when the failure branch is active.
    ///
    /// Exactly one of [`Self::is_success`] and [`Self::is_failure`] holds
    /// for any outcome.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the success payload, or `None` when the failure branch is
    /// active.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure payload, or `None` when the success branch is
    /// active.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) => None,
        }
    }
}
