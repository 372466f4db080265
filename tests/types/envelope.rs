use error_trace::{Code, Envelope, TracedError};
use serde_json::json;

#[test]
fn envelope_has_public_fields_only() {
    let err = TracedError::new(Code::NOT_FOUND)
        .with_message("invoice missing")
        .with_details([("invoice", "inv-7"), ("tenant", "acme")]);

    let value = serde_json::to_value(&err).expect("serialize");
    assert_eq!(
        value,
        json!({
            "code": "not-found",
            "message": "invoice missing",
            "reason": "not-found",
            "details": { "invoice": "inv-7", "tenant": "acme" }
        })
    );
}

#[test]
fn absent_error_serializes_to_null() {
    let none: Option<TracedError> = None;
    assert_eq!(serde_json::to_string(&none).expect("serialize"), "null");
}

#[test]
fn envelope_reflects_inherited_details() {
    let inner = TracedError::new(Code::TIMEOUT).with_detail("upstream", "ledger");
    let outer = TracedError::new(Code::TIMEOUT).with_cause(error_trace::trace(inner).expect("traced"));

    let envelope = outer.envelope();
    assert_eq!(envelope.details.get("upstream").map(String::as_str), Some("ledger"));
}

#[test]
fn envelope_round_trips_into_a_traced_error() {
    let raw = r#"{"code":"quota","message":"limit reached","reason":"monthly"}"#;
    let envelope: Envelope = serde_json::from_str(raw).expect("deserialize");

    let (err, line) = (envelope.into_traced(), line!());
    assert_eq!(err.code().as_str(), "quota");
    assert_eq!(err.message(), "limit reached");
    assert_eq!(err.reason(), "monthly");
    assert!(err.details().is_empty());
    assert_eq!(err.call_site().map(|site| site.line()), Some(i64::from(line)));
}
