use error_trace::{trace, CallSite, Code, Link, TracedError};

mod code;
#[cfg(feature = "serde")]
mod envelope;
mod merge;

#[test]
fn new_error_uses_code_defaults() {
    for code in Code::ALL.iter() {
        let err = TracedError::new(code.clone());
        assert_eq!(err.message(), format!("{code} error"));
        assert_eq!(err.reason(), code.as_str());
        assert!(err.details().is_empty());
        assert!(err.cause().is_none());
    }

    let custom = TracedError::new("quota");
    assert_eq!(custom.message(), "quota error");
    assert_eq!(custom.reason(), "quota");
}

#[test]
fn new_error_records_caller_location() {
    let (err, line) = (TracedError::new(Code::INTERNAL), line!());

    let site = err.call_site().expect("call site");
    assert_eq!(site.file(), file!());
    assert_eq!(site.line(), i64::from(line));
    assert_eq!(site.to_string(), format!("{}:{}", file!(), line));
}

#[cfg(not(feature = "symbolize"))]
#[test]
fn module_and_function_are_unknown_without_symbols() {
    let err = TracedError::new(Code::INTERNAL);

    let site = err.call_site().expect("call site");
    assert_eq!(site.module(), CallSite::UNKNOWN);
    assert_eq!(site.function(), CallSite::UNKNOWN);
}

#[cfg(feature = "symbolize")]
#[inline(never)]
fn load_user() -> TracedError {
    TracedError::new(Code::NOT_FOUND)
}

#[cfg(feature = "symbolize")]
#[test]
fn symbols_resolve_module_and_function() {
    let err = load_user();

    let site = err.call_site().expect("call site");
    assert_eq!(site.function(), "load_user");
    assert!(site.module().ends_with("types"), "module was {}", site.module());
    assert_eq!(site.file(), file!());
}

#[test]
fn every_mutator_recaptures_the_call_site() {
    let err = TracedError::new(Code::INVALID);
    let (err, line) = (err.with_detail("field", "email"), line!());
    assert_eq!(err.call_site().map(CallSite::line), Some(i64::from(line)));

    let (err, line) = (err.with_reason("format"), line!());
    assert_eq!(err.call_site().map(CallSite::line), Some(i64::from(line)));

    let (err, line) = (err.reset_details(), line!());
    assert_eq!(err.call_site().map(CallSite::line), Some(i64::from(line)));
}

#[test]
fn code_change_retargets_defaults_only() {
    let err = TracedError::new(Code::INVALID).with_code(Code::CONFLICT);
    assert_eq!(err.message(), "conflict error");
    assert_eq!(err.reason(), "conflict");

    let err = TracedError::new(Code::INVALID)
        .with_message("email already taken")
        .with_reason("duplicate")
        .with_code(Code::CONFLICT);
    assert_eq!(err.code(), &Code::CONFLICT);
    assert_eq!(err.message(), "email already taken");
    assert_eq!(err.reason(), "duplicate");
}

#[test]
fn message_args_tolerate_mismatches() {
    let err = TracedError::new(Code::INVALID).with_message_args("testing %d %s %s %s", &[&123, &"hello"]);
    assert_eq!(err.message(), "testing 123 hello...");

    let err = TracedError::new(Code::INVALID).with_message_args("plain", &[]);
    assert_eq!(err.message(), "plain");
}

#[test]
fn reset_reason_restores_code_string() {
    let err = TracedError::new(Code::FORBIDDEN).with_reason("role").reset_reason();
    assert_eq!(err.reason(), "forbidden");
}

#[test]
fn zero_value_is_not_traced() {
    let zero = TracedError::default();

    assert!(zero.call_site().is_none());
    assert!(trace(zero.clone()).is_none());
    assert!(trace(&zero).is_none());
    assert_eq!(zero.render(), "[]");
}

#[test]
fn retrace_keeps_previous_layer_and_its_site() {
    let (err, raised) = (TracedError::new(Code::EXPIRED).with_detail("token", "t-9"), line!());
    let (traced, relayed) = (trace(err).expect("traced"), line!());

    assert_eq!(traced.code(), &Code::EXPIRED);
    assert_eq!(traced.detail("token"), Some("t-9"));
    assert_eq!(traced.call_site().map(CallSite::line), Some(i64::from(relayed)));

    let Link::Traced(inner) = traced.unwrap_link() else {
        panic!("expected traced cause");
    };
    assert_eq!(inner.call_site().map(CallSite::line), Some(i64::from(raised)));
    assert!(inner.unwrap_link().is_end());
}

#[test]
fn custom_introspector_is_kept_through_traces() {
    use core::panic::Location;

    static FIXED: fn(&'static Location<'static>, usize) -> CallSite =
        |location, _| CallSite::new("billing", "charge", location.file(), location.line().into());

    let err = TracedError::new(Code::TEMPORARY).with_introspect(&FIXED);
    let traced = trace(err).expect("traced").with_reason("ledger");

    let site = traced.call_site().expect("call site");
    assert_eq!(site.module(), "billing");
    assert_eq!(site.function(), "charge");
    assert_eq!(site.file(), file!());
}

#[test]
fn traced_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<TracedError>();
}
