//! Where accepted messages go. The gate decides *whether* to write; a [`Sink`]
//! only decides *how*.

mod console;
mod memory;

pub use console::ConsoleSink;
pub use memory::{CapturedRecord, MemorySink};

use crate::level::Severity;

/// Opaque object a message is about. Sinks may show its name; the gate never inspects it.
pub trait Context {
    /// Human-readable instance name.
    fn name(&self) -> &str;

    /// Type description used by `assert_not_null` reports.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// One accepted message, borrowed for the duration of a single write.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    pub severity: Severity,
    /// `None` for calls made without a channel.
    pub channel: Option<&'a str>,
    pub message: &'a str,
    pub context: Option<&'a dyn Context>,
}

impl Record<'_> {
    /// Context name, or an empty string when no context was passed.
    #[must_use]
    pub fn context_name(&self) -> &str {
        self.context.map_or("", Context::name)
    }
}

/// `Send` so a gate holding a boxed sink can live behind a `Mutex`.
pub trait Sink: Send {
    /// Renders one record. Failures are the sink's own business and never reach the caller.
    fn write(&self, record: &Record<'_>);
}

/// Discards everything. Used when a gate is built without a sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn write(&self, _record: &Record<'_>) {}
}
