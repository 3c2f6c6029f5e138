//! The two encodings satisfy the same external contract and convert
//! losslessly into one another.
#![expect(
    deprecated,
    reason = "the comparison exercises the deprecated field-presence encoding"
)]

use outcome::{MessageError, Outcome, PresenceOutcome};
use rstest::rstest;

#[rstest]
#[case(3)]
#[case(0)]
#[case(-7)]
fn encodings_agree_on_successes(#[case] payload: i32) {
    let tagged: Outcome<i32, MessageError> = Outcome::success(payload);
    let presence: PresenceOutcome<i32, MessageError> = PresenceOutcome::success(payload);

    assert_eq!(tagged.is_success(), presence.is_success());
    assert_eq!(tagged.is_failure(), presence.is_failure());
    assert_eq!(tagged.value(), presence.value());
    assert_eq!(tagged.error(), presence.error());
}

#[rstest]
#[case("boom")]
#[case("")]
fn encodings_agree_on_failures(#[case] message: &str) {
    let tagged: Outcome<i32, MessageError> = Outcome::failure(MessageError::new(message));
    let presence: PresenceOutcome<i32, MessageError> =
        PresenceOutcome::failure(MessageError::new(message));

    assert_eq!(tagged.is_success(), presence.is_success());
    assert_eq!(tagged.is_failure(), presence.is_failure());
    assert_eq!(tagged.value(), presence.value());
    assert_eq!(tagged.error(), presence.error());
}

#[test]
fn re_encoding_as_field_presence_preserves_the_payload() {
    let tagged: Outcome<i32, MessageError> = Outcome::failure(MessageError::new("boom"));
    let presence: PresenceOutcome<i32, MessageError> = tagged.clone().into();

    assert!(presence.is_failure());
    assert_eq!(presence.error(), tagged.error());
}

#[test]
fn re_encoding_as_the_tagged_enum_preserves_the_payload() {
    let presence: PresenceOutcome<i32, MessageError> = PresenceOutcome::success(7);
    let tagged = Outcome::from(presence);

    assert!(tagged.is_success());
    assert_eq!(tagged.value(), Some(&7));
}

#[test]
fn a_round_trip_returns_an_equal_outcome() {
    let original: Outcome<i32, MessageError> = Outcome::success(7);
    let round_tripped = Outcome::from(PresenceOutcome::from(original.clone()));
    assert_eq!(round_tripped, original);

    let failed: Outcome<i32, MessageError> = Outcome::failure(MessageError::new("boom"));
    let failed_round_tripped = Outcome::from(PresenceOutcome::from(failed.clone()));
    assert_eq!(failed_round_tripped, failed);
}

#[test]
fn into_parts_matches_the_active_variant() {
    let (value, absent_error) = PresenceOutcome::<i32, MessageError>::success(7).into_parts();
    assert_eq!(value, Some(7));
    assert!(absent_error.is_none());

    let (absent_value, error) =
        PresenceOutcome::<i32, MessageError>::failure(MessageError::new("boom")).into_parts();
    assert!(absent_value.is_none());
    assert_eq!(error, Some(MessageError::new("boom")));
}
