use error_trace::{trace, Code, TracedError};

fn traced(err: TracedError) -> TracedError {
    trace(err).expect("traced")
}

#[test]
fn local_detail_wins_over_cause_detail() {
    let inner = TracedError::new(Code::INVALID).with_detail("x", "1");
    let outer = TracedError::new(Code::INVALID).with_detail("x", "2").with_cause(traced(inner));

    assert_eq!(outer.detail("x"), Some("2"));
}

#[test]
fn missing_detail_is_inherited_from_cause() {
    let inner = TracedError::new(Code::INVALID).with_detail("y", "1");
    let outer = TracedError::new(Code::INVALID).with_cause(traced(inner));

    assert_eq!(outer.detail("y"), Some("1"));
    assert_eq!(outer.details().len(), 1);
}

#[test]
fn details_bubble_up_through_several_layers() {
    let db = TracedError::new(Code::TEMPORARY).with_detail("table", "invoices");
    let repo = TracedError::new(Code::TEMPORARY).with_detail("repo", "billing").with_cause(traced(db));
    let api = TracedError::new(Code::INTERNAL).with_cause(traced(repo));

    assert_eq!(api.detail("table"), Some("invoices"));
    assert_eq!(api.detail("repo"), Some("billing"));
}

#[test]
fn with_details_upserts_every_entry() {
    let err = TracedError::new(Code::INVALID)
        .with_detail("a", "1")
        .with_details([("a", "2"), ("b", "3")]);

    assert_eq!(err.detail("a"), Some("2"));
    assert_eq!(err.detail("b"), Some("3"));
}

#[test]
fn reason_is_inherited_with_equal_codes_and_empty_local_reason() {
    let inner = TracedError::new(Code::TIMEOUT).with_reason("upstream-slow");
    let outer = TracedError::new(Code::TIMEOUT).with_reason("").with_cause(traced(inner));

    assert_eq!(outer.reason(), "upstream-slow");
}

#[test]
fn reason_is_not_inherited_across_codes() {
    let inner = TracedError::new(Code::TIMEOUT).with_reason("upstream-slow");
    let outer = TracedError::new(Code::INTERNAL).with_reason("").with_cause(traced(inner));

    assert_eq!(outer.reason(), "");
}

#[test]
fn explicit_reason_is_not_overwritten() {
    let inner = TracedError::new(Code::TIMEOUT).with_reason("upstream-slow");
    let outer = TracedError::new(Code::TIMEOUT).with_cause(traced(inner));

    assert_eq!(outer.reason(), "timeout");
}

#[test]
fn default_message_is_inherited_from_traced_cause() {
    let inner = TracedError::new(Code::TEMPORARY).with_message("ledger unavailable");
    let outer = TracedError::new(Code::INTERNAL).with_cause(traced(inner));

    assert_eq!(outer.message(), "ledger unavailable");
}

#[test]
fn default_message_is_inherited_from_foreign_cause() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "connection refused");
    let err = TracedError::new(Code::TEMPORARY).with_cause(io);

    assert_eq!(err.message(), "connection refused");
    assert_eq!(err.reason(), "temporary");
}

#[test]
fn explicit_message_is_kept() {
    let inner = TracedError::new(Code::TEMPORARY).with_message("ledger unavailable");
    let outer = TracedError::new(Code::INTERNAL).with_message("charge failed").with_cause(traced(inner));

    assert_eq!(outer.message(), "charge failed");
}

#[test]
fn cause_without_own_cause_keeps_existing_cause() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    let err = TracedError::new(Code::INTERNAL)
        .with_cause(io)
        .with_cause(TracedError::new(Code::INVALID));

    let origin = err.origin().expect("foreign cause kept");
    assert_eq!(origin.to_string(), "disk full");
}

#[test]
fn reset_details_is_refilled_by_later_mutators() {
    let inner = TracedError::new(Code::INVALID).with_detail("field", "email");
    let outer = TracedError::new(Code::INVALID)
        .with_detail("form", "signup")
        .with_cause(traced(inner))
        .reset_details();

    assert!(outer.details().is_empty());

    let outer = outer.with_reason("format");
    assert_eq!(outer.detail("field"), Some("email"));
    assert_eq!(outer.detail("form"), None);
}

#[test]
fn causes_are_private_copies() {
    let inner = TracedError::new(Code::INVALID).with_detail("field", "email");
    let outer = TracedError::new(Code::INVALID).with_cause(traced(inner.clone()));

    let inner = inner.with_detail("field", "phone");
    assert_eq!(inner.detail("field"), Some("phone"));
    assert_eq!(outer.detail("field"), Some("email"));
}
