//! Tests for `assert`, `ensure`, and `assert_not_null`.

use chanlog::{Context, DEFAULT_ASSERT_MESSAGE, Error, LogGate, MemorySink, Severity};

fn gate(enabled: bool, sink: &MemorySink) -> LogGate {
    LogGate::builder()
        .enabled(enabled)
        .sink(sink.clone())
        .build()
}

#[test]
fn failed_assert_raises_when_enabled() {
    let sink = MemorySink::new();
    let err = gate(true, &sink).assert(false, "x").unwrap_err();
    assert!(matches!(&err, Error::AssertionFailed(msg) if msg == "x"));
    assert_eq!(err.to_string(), "assertion failed: x");
}

#[test]
fn passing_assert_is_ok() {
    let sink = MemorySink::new();
    assert!(gate(true, &sink).assert(true, "x").is_ok());
}

#[test]
fn assert_is_noop_when_disabled() {
    let sink = MemorySink::new();
    assert!(gate(false, &sink).assert(false, "x").is_ok());
    assert!(sink.is_empty());
}

#[test]
fn assert_ignores_threshold() {
    let sink = MemorySink::new();
    let gate = LogGate::builder()
        .enabled(true)
        .threshold(Severity::None)
        .sink(sink.clone())
        .build();
    assert!(gate.assert(false, "still checked").is_err());
}

#[test]
fn ensure_uses_default_message() {
    let sink = MemorySink::new();
    let err = gate(true, &sink).ensure(false).unwrap_err();
    assert!(matches!(err, Error::AssertionFailed(msg) if msg == DEFAULT_ASSERT_MESSAGE));
}

#[test]
fn assert_propagates_with_question_mark() {
    fn spawn(gate: &LogGate, hp: i32) -> Result<i32, Error> {
        gate.assert(hp > 0, "hp must be positive")?;
        Ok(hp)
    }

    let sink = MemorySink::new();
    let gate = gate(true, &sink);
    assert_eq!(spawn(&gate, 10).unwrap(), 10);
    assert!(spawn(&gate, 0).is_err());
}

struct Spawner {
    name: String,
}

impl Context for Spawner {
    fn name(&self) -> &str {
        &self.name
    }
}

#[test]
fn assert_not_null_reports_missing_value() {
    let sink = MemorySink::new();
    let gate = gate(true, &sink);
    let spawner = Spawner {
        name: "north_gate".to_string(),
    };

    gate.assert_not_null(None::<&u32>, "prefab", &spawner);

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Error);
    assert!(records[0].message.starts_with("prefab in object north_gate ("));
    assert!(records[0].message.contains("Spawner"));
    assert!(records[0].message.ends_with(") is null!"));
    assert_eq!(records[0].context.as_ref().map(|c| c.0.as_str()), Some("north_gate"));
}

#[test]
fn assert_not_null_silent_for_present_value() {
    let sink = MemorySink::new();
    let gate = gate(true, &sink);
    let spawner = Spawner {
        name: "north_gate".to_string(),
    };

    gate.assert_not_null(Some(&5), "prefab", &spawner);
    assert!(sink.is_empty());
}

#[test]
fn assert_not_null_silent_when_disabled() {
    let sink = MemorySink::new();
    let gate = gate(false, &sink);
    let spawner = Spawner {
        name: "north_gate".to_string(),
    };

    gate.assert_not_null(None::<&str>, "prefab", &spawner);
    assert!(sink.is_empty());
}
