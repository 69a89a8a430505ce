use jsonbind_core::{JDate, JDateTime, JEpochSeconds, JsonConverter, JsonError, NodePath};
use time::macros::{date, datetime};

#[test]
fn rfc3339_datetime_roundtrip() {
    let moment = datetime!(2024-05-17 12:30:45 UTC);
    assert_eq!(JDateTime.to_json(&moment), r#""2024-05-17T12:30:45Z""#);
    assert_eq!(
        JDateTime.from_json(r#""2024-05-17T12:30:45Z""#).unwrap(),
        moment
    );

    // Offsets are preserved, not normalized to UTC.
    let offset = datetime!(2024-05-17 12:30:45 +02:00);
    let text = JDateTime.to_json(&offset);
    assert_eq!(text, r#""2024-05-17T12:30:45+02:00""#);
    assert_eq!(JDateTime.from_json(&text).unwrap(), offset);
}

#[test]
fn malformed_datetime_is_a_value_error() {
    let err = JDateTime.from_json(r#""yesterday""#).unwrap_err();
    assert!(
        matches!(&err, JsonError::Value { path, .. } if *path == NodePath::root()),
        "got {err:?}"
    );
}

#[test]
fn calendar_date_roundtrip() {
    let day = date!(2024 - 05 - 17);
    assert_eq!(JDate.to_json(&day), r#""2024-05-17""#);
    assert_eq!(JDate.from_json(r#""2024-05-17""#).unwrap(), day);
    assert!(JDate.from_json(r#""17/05/2024""#).is_err());
}

#[test]
fn epoch_seconds_is_numeric_backed() {
    let moment = datetime!(2021-01-01 00:00:00 UTC);
    assert_eq!(JEpochSeconds.to_json(&moment), "1609459200");
    assert_eq!(JEpochSeconds.from_json("1609459200").unwrap(), moment);

    // A fractional number of seconds is the right node kind but an invalid
    // domain value.
    let err = JEpochSeconds.from_json("1609459200.5").unwrap_err();
    assert!(matches!(err, JsonError::Value { .. }), "got {err:?}");
}
