use error_trace::{Cause, CallSite, Code, ResultExt, TracedError};

fn lookup(found: bool) -> Result<u32, TracedError> {
    if found {
        Ok(7)
    } else {
        Err(TracedError::new(Code::NOT_FOUND).with_detail("id", "7"))
    }
}

#[test]
fn ok_values_pass_through() {
    assert_eq!(lookup(true).trace_err().expect("ok"), 7);
    assert_eq!(lookup(true).or_code(Code::INTERNAL).expect("ok"), 7);
}

#[test]
fn trace_err_adds_a_layer_at_the_caller() {
    let (err, line) = (lookup(false).trace_err().unwrap_err(), line!());

    assert_eq!(err.code(), &Code::NOT_FOUND);
    assert_eq!(err.detail("id"), Some("7"));
    assert_eq!(err.chain().count(), 2);
    assert_eq!(err.call_site().map(CallSite::line), Some(i64::from(line)));
}

#[test]
fn or_code_keeps_the_original_as_cause() {
    let err = lookup(false).or_code(Code::INTERNAL).unwrap_err();

    assert_eq!(err.code(), &Code::INTERNAL);
    assert_eq!(err.reason(), "internal");
    assert_eq!(err.message(), "not-found error");
    assert_eq!(err.detail("id"), Some("7"));

    let Some(Cause::Traced(inner)) = err.cause() else {
        panic!("expected traced cause");
    };
    assert_eq!(inner.code(), &Code::NOT_FOUND);
}

#[test]
fn foreign_results_are_wrapped() {
    let err = "port".parse::<u16>().trace_err().unwrap_err();

    assert_eq!(err.code(), &Code::INTERNAL);
    assert_eq!(err.message(), "invalid digit found in string");
    assert!(err.origin().is_some());
}
