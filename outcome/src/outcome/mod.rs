//! The outcome container and its two encodings.
//!
//! [`Outcome`] carries the active branch as an enum discriminant;
//! [`PresenceOutcome`] infers it from which field of the record is
//! populated. Both expose the same surface and convert losslessly into one
//! another through `From`, so callers can migrate from the field-presence
//! encoding without changing observable behaviour.

mod conversions;
mod presence;
mod types;

#[expect(
    deprecated,
    reason = "re-exported until the field-presence encoding is removed"
)]
pub use presence::PresenceOutcome;
pub use types::Outcome;
