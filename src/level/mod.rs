//! Severity levels and the threshold comparison that gates every logging call.

use std::fmt;
use std::str::FromStr;

/// Ordered from least to most verbose so a threshold comparison is a plain `<=`.
///
/// `None` is only meaningful as a threshold: with it, nothing passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// Threshold that silences everything.
    None = 0,
    /// Errors carrying a captured `std::error::Error` and its source chain.
    Exception = 1,
    /// Failures that prevent the current operation from completing.
    Error = 2,
    /// Anomalies that may need attention.
    Warning = 3,
    /// Normal operational messages. The most verbose level.
    #[default]
    Info = 4,
}

impl Severity {
    /// Lowercase because config files and CLI args use lowercase severity strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Exception => "exception",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Used by help output, shell completion, and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::None,
            Self::Exception,
            Self::Error,
            Self::Warning,
            Self::Info,
        ]
    }

    /// True when a message at `self` may pass a gate whose threshold is `threshold`.
    #[must_use]
    pub fn within(self, threshold: Self) -> bool {
        self != Self::None && threshold != Self::None && self <= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown severity" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl From<ParseSeverityError> for crate::Error {
    fn from(e: ParseSeverityError) -> Self {
        Self::InvalidSeverity(e.0)
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "exception" | "exc" => Ok(Self::Exception),
            "error" | "err" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
