//! Tests for console line rendering.

use chanlog::fmt::{LayoutSegment, LineLayout, Placeholder};
use chanlog::{ConsoleSink, Context, Record, Severity};

fn record<'a>(severity: Severity, channel: Option<&'a str>, message: &'a str) -> Record<'a> {
    Record {
        severity,
        channel,
        message,
        context: None,
    }
}

#[test]
fn plain_default_layout() {
    let sink = ConsoleSink::new().colors(false);
    let line = sink.render(&record(Severity::Warning, Some("AI"), "stuck"));
    assert_eq!(line, "[WARNING  ] AI  stuck");
}

#[test]
fn channel_less_record_leaves_column_empty() {
    let sink = ConsoleSink::new().colors(false).layout("{tag}|{channel}|{msg}");
    let line = sink.render(&record(Severity::Info, None, "ready"));
    assert_eq!(line, "[INFO     ]||ready");
}

#[test]
fn colored_tag_wraps_with_reset() {
    let sink = ConsoleSink::new().layout("{tag}");
    let line = sink.render(&record(Severity::Error, None, "x"));
    assert!(line.starts_with("\x1b[38;2;255;85;85m[ERROR"));
    assert!(line.ends_with("\x1b[0m"));
}

struct Door;

impl Context for Door {
    fn name(&self) -> &str {
        "door_3"
    }
}

#[test]
fn severity_and_context_placeholders() {
    let sink = ConsoleSink::new().colors(false).layout("{severity} {context}: {msg}");
    let rec = Record {
        severity: Severity::Exception,
        channel: None,
        message: "jammed",
        context: Some(&Door),
    };
    assert_eq!(sink.render(&rec), "exception door_3: jammed");
}

#[test]
fn timestamp_uses_configured_format() {
    let sink = ConsoleSink::new()
        .colors(false)
        .layout("{timestamp}")
        .timestamp_format("fixed");
    assert_eq!(sink.render(&record(Severity::Info, None, "x")), "fixed");
}

#[test]
fn layout_keeps_unknown_placeholders_literal() {
    let layout = LineLayout::parse("{tag} {bogus} {msg");
    assert_eq!(
        layout.segments(),
        [
            LayoutSegment::Placeholder(Placeholder::Tag),
            LayoutSegment::Literal(" {bogus} {msg".to_string()),
        ]
    );
    assert!(!layout.uses_timestamp());
}
