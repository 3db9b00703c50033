//! Colored terminal sink. Warning and more severe records go to stderr, the rest to stdout.

use super::{Record, Sink};
use crate::fmt::{Color, LayoutValues, LineLayout};
use crate::level::Severity;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Width of the longest severity label (`EXCEPTION`) so message columns line up.
const TAG_WIDTH: usize = 9;

#[derive(Debug, Clone)]
pub struct ConsoleSink {
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
    layout: LineLayout,
    severity_colors: HashMap<Severity, Color>,
    /// chrono `strftime` pattern for `{timestamp}`.
    timestamp_format: String,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    #[must_use]
    pub fn new() -> Self {
        let mut severity_colors = HashMap::new();
        severity_colors.insert(Severity::Exception, Color::pink());
        severity_colors.insert(Severity::Error, Color::red());
        severity_colors.insert(Severity::Warning, Color::yellow());
        severity_colors.insert(Severity::Info, Color::cyan());

        Self {
            colors_enabled: true,
            layout: LineLayout::default(),
            severity_colors,
            timestamp_format: "%H:%M:%S".to_string(),
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub fn layout(mut self, layout: &str) -> Self {
        self.layout = LineLayout::parse(layout);
        self
    }

    #[must_use]
    pub fn severity_color(mut self, severity: Severity, color: Color) -> Self {
        self.severity_colors.insert(severity, color);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Renders a record into the exact line [`Sink::write`] would print.
    #[must_use]
    pub fn render(&self, record: &Record<'_>) -> String {
        let label = record.severity.as_str().to_uppercase();
        let tag = format!("[{label:<TAG_WIDTH$}]");
        let channel = record.channel.unwrap_or_default();

        let (tag, channel) = if self.colors_enabled {
            let color = self
                .severity_colors
                .get(&record.severity)
                .copied()
                .unwrap_or(Color::white());
            let channel = if channel.is_empty() {
                String::new()
            } else {
                format!("{}{channel}{}", Color::DIM, Color::RESET)
            };
            (format!("{}{tag}{}", color.fg_ansi(), Color::RESET), channel)
        } else {
            (tag, channel.to_string())
        };

        // A bad strftime pattern leaves the column empty instead of panicking.
        let mut timestamp = String::new();
        if self.layout.uses_timestamp() {
            let _ = write!(
                timestamp,
                "{}",
                chrono::Local::now().format(&self.timestamp_format)
            );
        }

        let values = LayoutValues {
            tag: &tag,
            channel: &channel,
            msg: record.message,
            timestamp: &timestamp,
            severity: record.severity.as_str(),
            context: record.context_name(),
        };

        self.layout.render(&values)
    }
}

impl Sink for ConsoleSink {
    fn write(&self, record: &Record<'_>) {
        let line = self.render(record);

        let _ = if record.severity <= Severity::Warning {
            writeln!(io::stderr(), "{line}")
        } else {
            writeln!(io::stdout(), "{line}")
        };
    }
}
