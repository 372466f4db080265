use error_trace::format::{fallback_message, interpolate};
use error_trace::Code;

#[test]
fn deficit_arguments_truncate_with_ellipsis() {
    assert_eq!(
        interpolate("testing %d %s %s %s %s %s", &[&123, &"hello", &"world"]),
        "testing 123 hello world..."
    );
}

#[test]
fn surplus_arguments_are_dropped() {
    assert_eq!(interpolate("testing %d", &[&123, &"hello", &"world"]), "testing 123");
}

#[test]
fn escaped_percent_renders_literally() {
    assert_eq!(interpolate("testing %d%%", &[&100]), "testing 100%");
}

#[test]
fn bare_percent_signs_are_not_placeholders() {
    assert_eq!(interpolate("50% of %s", &[&"x"]), "50% of x");
    assert_eq!(interpolate("%s at 100% load", &[&"cpu"]), "cpu at 100% load");
    assert_eq!(interpolate("discount 10%", &[&5]), "discount 10%");
}

#[test]
fn bare_percent_before_missing_argument_is_kept() {
    assert_eq!(interpolate("%d% of %s %s", &[&1, &"a"]), "1% of a...");
    assert_eq!(interpolate("load %d%", &[]), "load %d%");
}

#[test]
fn no_arguments_leave_template_untouched() {
    assert_eq!(interpolate("", &[]), "");
    assert_eq!(interpolate("rate %d%%", &[]), "rate %d%%");
}

#[test]
fn template_without_placeholders_ignores_arguments() {
    assert_eq!(interpolate("static text", &[&1, &2]), "static text");
}

#[test]
fn every_verb_uses_display() {
    assert_eq!(interpolate("%v %t %f %s", &[&"a", &true, &1.5, &'c']), "a true 1.5 c");
}

#[test]
fn fallback_message_names_the_code() {
    assert_eq!(fallback_message(&Code::NOT_IMPLEMENTED), "not-implemented error");
    assert_eq!(fallback_message(&Code::new("quota")), "quota error");
}
