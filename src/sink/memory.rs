//! Keeps accepted records in memory so callers can look at exactly what got through.

use super::{Record, Sink};
use crate::level::Severity;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Owned copy of a [`Record`]; the context is reduced to its name and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub severity: Severity,
    pub channel: Option<String>,
    pub message: String,
    pub context: Option<(String, &'static str)>,
}

/// Clones share one buffer: hand one clone to the gate and keep another to inspect.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a half-pushed Vec behind.
    fn lock(&self) -> MutexGuard<'_, Vec<CapturedRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of everything written so far.
    #[must_use]
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.lock().clone()
    }

    /// Messages only, in write order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|r| r.message.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, record: &Record<'_>) {
        let captured = CapturedRecord {
            severity: record.severity,
            channel: record.channel.map(ToString::to_string),
            message: record.message.to_string(),
            context: record
                .context
                .map(|ctx| (ctx.name().to_string(), ctx.type_name())),
        };
        self.lock().push(captured);
    }
}
