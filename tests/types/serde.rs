use serde_json::json;
use simple_result::{Error, Errors, MetadataValue, Outcome, TypedOutcome};

#[test]
fn error_serializes_message_and_metadata() {
    let err = Error::new("timeout").with_metadata("attempt", 3).with_metadata("fatal", false);

    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value, json!({ "message": "timeout", "metadata": { "attempt": 3, "fatal": false } }));
}

#[test]
fn error_without_metadata_omits_the_field() {
    let value = serde_json::to_value(Error::new("bare")).unwrap();
    assert_eq!(value, json!({ "message": "bare" }));

    let back: Error = serde_json::from_value(value).unwrap();
    assert!(back.metadata().is_empty());
}

#[test]
fn outcomes_round_trip_through_json() {
    let failed = TypedOutcome::<u32>::fail_many([
        Error::new("a").with_metadata("host", "db"),
        Error::new("b"),
    ]);

    let encoded = serde_json::to_string(&failed).unwrap();
    let decoded: TypedOutcome<u32> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, failed);

    let encoded = serde_json::to_string(&Outcome::ok()).unwrap();
    let decoded: Outcome = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, Outcome::ok());
}

#[test]
fn empty_error_sequence_is_rejected() {
    let decoded = serde_json::from_value::<Errors>(json!([]));
    assert!(decoded.is_err());

    let decoded = serde_json::from_value::<Outcome>(json!({ "Failure": [] }));
    assert!(decoded.is_err());
}

#[test]
fn metadata_values_round_trip_through_json() {
    let err = Error::new("quota exceeded")
        .with_metadata("limit", 5u64)
        .with_metadata("huge", u64::MAX)
        .with_metadata("delta", -7i64)
        .with_metadata("ratio", 0.25)
        .with_metadata("tenant", "acme")
        .with_metadata("retryable", true);

    let encoded = serde_json::to_string(&err).unwrap();
    let decoded: Error = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, err);
    assert_eq!(decoded.metadata_value("limit"), Some(&MetadataValue::Int(5)));
    assert_eq!(decoded.metadata_value("huge"), Some(&MetadataValue::UInt(u64::MAX)));
    assert_eq!(decoded.metadata_value("delta"), Some(&MetadataValue::Int(-7)));
    assert_eq!(decoded.metadata_value("ratio"), Some(&MetadataValue::Float(0.25)));
    assert_eq!(decoded.metadata_value("tenant"), Some(&MetadataValue::from("acme")));
}

#[test]
fn failures_with_unsigned_metadata_round_trip() {
    let failed = Outcome::fail(Error::new("x").with_metadata("n", 5u64));

    let decoded: Outcome = serde_json::from_value(serde_json::to_value(&failed).unwrap()).unwrap();
    assert_eq!(decoded, failed);
}
