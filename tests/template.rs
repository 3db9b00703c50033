//! Tests for positional message templates.

use chanlog::Error;
use chanlog::fmt::MessageTemplate;
use chanlog::fmt::template::format;

#[test]
fn indexed_arguments() {
    let out = format("{1} before {0}", &[&"a", &"b"]).unwrap();
    assert_eq!(out, "b before a");
}

#[test]
fn repeated_index() {
    let out = format("{0}-{0}", &[&7]).unwrap();
    assert_eq!(out, "7-7");
}

#[test]
fn auto_arguments() {
    let out = format("{} and {}", &[&1, &2]).unwrap();
    assert_eq!(out, "1 and 2");
}

#[test]
fn escaped_braces() {
    let out = format("{{literal}} {0}", &[&"x"]).unwrap();
    assert_eq!(out, "{literal} x");
}

#[test]
fn extra_arguments_are_ignored() {
    let out = format("only {0}", &[&1, &2, &3]).unwrap();
    assert_eq!(out, "only 1");
}

#[test]
fn missing_argument_is_format_error() {
    let err = format("{0} {2}", &[&1, &2]).unwrap_err();
    assert!(matches!(err, Error::Format(_)));
}

#[test]
fn malformed_templates_are_rejected() {
    for bad in ["{0", "oops}", "{x}", "{-1}"] {
        let err = MessageTemplate::parse(bad).unwrap_err();
        assert!(matches!(err, Error::Format(_)), "{bad} should fail");
    }
}

#[test]
fn arg_count_is_highest_index_plus_one() {
    assert_eq!(MessageTemplate::parse("none").unwrap().arg_count(), 0);
    assert_eq!(MessageTemplate::parse("{2} {0}").unwrap().arg_count(), 3);
    assert_eq!(MessageTemplate::parse("{} {}").unwrap().arg_count(), 2);
}

#[test]
fn display_normalizes_indices() {
    let template = MessageTemplate::parse("{} {{x}} {}").unwrap();
    assert_eq!(template.to_string(), "{0} {{x}} {1}");
}
