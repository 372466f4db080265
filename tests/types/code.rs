use error_trace::status::{http_status, http_status_or_default, DEFAULT_STATUS};
use error_trace::{Code, TracedError};

#[test]
fn builtin_vocabulary_is_hyphenated() {
    let all = Code::ALL;
    let names: Vec<_> = all.iter().map(Code::as_str).collect();
    assert_eq!(
        names,
        [
            "internal",
            "conflict",
            "expired",
            "forbidden",
            "invalid",
            "not-found",
            "not-implemented",
            "temporary",
            "timeout",
            "unauthorized",
            "unprocessable",
        ]
    );
}

#[test]
fn custom_codes_compare_by_string() {
    assert_eq!(Code::new("internal"), Code::INTERNAL);
    assert_eq!(Code::from(String::from("quota")), Code::new("quota"));
    assert_ne!(Code::new("Internal"), Code::INTERNAL);
    assert!(Code::default().is_empty());
}

#[test]
fn status_table_matches_vocabulary() {
    let expected = [
        (Code::CONFLICT, 400),
        (Code::EXPIRED, 400),
        (Code::FORBIDDEN, 403),
        (Code::INTERNAL, 500),
        (Code::INVALID, 406),
        (Code::NOT_FOUND, 404),
        (Code::NOT_IMPLEMENTED, 501),
        (Code::TEMPORARY, 500),
        (Code::TIMEOUT, 408),
        (Code::UNAUTHORIZED, 401),
        (Code::UNPROCESSABLE, 422),
    ];

    for (code, status) in expected {
        assert_eq!(http_status(&code), Some(status), "{code}");
    }
}

#[test]
fn custom_codes_fall_back_to_default_status() {
    assert_eq!(http_status(&Code::new("quota")), None);
    assert_eq!(http_status_or_default(&Code::new("quota")), DEFAULT_STATUS);
    assert_eq!(TracedError::new("quota").http_status(), 500);
    assert_eq!(TracedError::new(Code::UNPROCESSABLE).http_status(), 422);
}
