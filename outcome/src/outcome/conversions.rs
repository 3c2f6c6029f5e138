//! Conversions between the two outcome encodings.
#![expect(
    deprecated,
    reason = "conversions keep the deprecated encoding interchangeable"
)]

use std::error::Error;

use super::presence::PresenceOutcome;
use super::types::Outcome;

/// Re-encodes a tagged outcome as field presence.
///
/// Bounded like the checked constructors: the failure branch goes through
/// [`PresenceOutcome::failure`], which requires an error-like payload.
impl<T, E> From<Outcome<T, E>> for PresenceOutcome<T, E>
where
    E: Error,
{
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Self::success(value),
            Outcome::Failure(error) => Self::failure(error),
        }
    }
}

/// Re-encodes a field-presence outcome as the tagged enum.
///
/// The constructors populate exactly one field; the two remaining
/// representable states cannot be reached through the public surface and
/// abort the conversion if they ever appear.
impl<T, E> From<PresenceOutcome<T, E>> for Outcome<T, E> {
    fn from(outcome: PresenceOutcome<T, E>) -> Self {
        match outcome.into_parts() {
            (Some(value), None) => Self::Success(value),
            (None, Some(error)) => Self::Failure(error),
            (Some(_), Some(_)) | (None, None) => {
                panic!("a field-presence outcome must hold exactly one payload")
            }
        }
    }
}
