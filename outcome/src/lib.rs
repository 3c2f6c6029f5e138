//! Two-variant outcome container for explicit success and failure handling.
//!
//! This crate defines [`Outcome`], a discriminated container holding either
//! the value a computation produced or the error explaining why it could
//! not produce one. Failures travel as ordinary data instead of panics:
//! callers test the state with [`Outcome::is_success`] /
//! [`Outcome::is_failure`] or match on the variants directly, and the
//! compiler will not let a payload out without going through the
//! discriminant.
//!
//! ```
//! use outcome::{MessageError, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16, MessageError> {
//!     match raw.parse() {
//!         Ok(port) => Outcome::success(port),
//!         Err(_) => Outcome::failure(MessageError::new(format!("not a port: {raw}"))),
//!     }
//! }
//!
//! let outcome = parse_port("8080");
//! assert!(outcome.is_success());
//! assert_eq!(outcome.value(), Some(&8080));
//!
//! let outcome = parse_port("club");
//! assert!(outcome.is_failure());
//! ```
//!
//! An alternative encoding, [`PresenceOutcome`], keys the active branch off
//! which field of the record is populated rather than off an explicit
//! discriminant. It behaves identically from the outside and remains
//! available for migration, but new code should prefer [`Outcome`].

mod error;
mod outcome;

pub use error::MessageError;
pub use outcome::Outcome;
#[expect(
    deprecated,
    reason = "re-exported until the field-presence encoding is removed"
)]
pub use outcome::PresenceOutcome;
