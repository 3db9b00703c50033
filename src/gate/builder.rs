//! Stepwise construction of a [`LogGate`], including the optional seeding step.

use super::LogGate;
use crate::channel::ChannelRegistry;
use crate::config::ChannelSettings;
use crate::fmt::Color;
use crate::level::Severity;
use crate::sink::{ConsoleSink, NullSink, Sink};

pub struct GateBuilder {
    enabled: bool,
    threshold: Severity,
    default_channel_state: bool,
    seed: Option<ChannelSettings>,
    sink: Option<Box<dyn Sink>>,
}

impl Default for GateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GateBuilder {
    /// Enabled in debug builds only, `Info` threshold, channels default to enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: cfg!(debug_assertions),
            threshold: Severity::Info,
            default_channel_state: true,
            seed: None,
            sink: None,
        }
    }

    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub const fn threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Overridden by the seed's own default state when a seed is supplied.
    #[must_use]
    pub const fn default_channel_state(mut self, state: bool) -> Self {
        self.default_channel_state = state;
        self
    }

    /// Persisted channel states applied before the gate answers its first query.
    /// `None` models deployments that skip loading them.
    #[must_use]
    pub fn seed(mut self, settings: Option<ChannelSettings>) -> Self {
        self.seed = settings;
        self
    }

    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Sub-builder for a [`ConsoleSink`].
    #[must_use]
    pub fn console(self) -> ConsoleBuilder {
        ConsoleBuilder {
            parent: self,
            sink: ConsoleSink::new(),
        }
    }

    #[must_use]
    pub fn build(self) -> LogGate {
        let mut channels = ChannelRegistry::new(self.default_channel_state);
        if let Some(settings) = self.seed {
            channels.seed(settings.state, settings.default_state);
        }

        LogGate {
            enabled: self.enabled,
            threshold: self.threshold,
            channels,
            sink: self.sink.unwrap_or_else(|| Box::new(NullSink)),
        }
    }
}

pub struct ConsoleBuilder {
    parent: GateBuilder,
    sink: ConsoleSink,
}

impl ConsoleBuilder {
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.sink = self.sink.colors(enabled);
        self
    }

    /// Line layout such as `"{timestamp} {tag} {channel}  {msg}"`.
    #[must_use]
    pub fn layout(mut self, layout: &str) -> Self {
        self.sink = self.sink.layout(layout);
        self
    }

    #[must_use]
    pub fn severity_color(mut self, severity: Severity, color: Color) -> Self {
        self.sink = self.sink.severity_color(severity, color);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.sink = self.sink.timestamp_format(format);
        self
    }

    /// Installs the console sink and returns to the gate builder.
    #[must_use]
    pub fn done(mut self) -> GateBuilder {
        self.parent.sink = Some(Box::new(self.sink));
        self.parent
    }
}
