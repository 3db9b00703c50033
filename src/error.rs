//! Unified error type for all chanlog operations.

/// Error type for chanlog operations.
#[derive(Debug)]
pub enum Error {
    /// A checked statement was false while the gate was enabled.
    AssertionFailed(String),
    /// Message template could not be parsed or rendered.
    Format(String),
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// TOML config serialization error.
    ConfigSerialize(toml::ser::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Invalid severity string.
    InvalidSeverity(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssertionFailed(msg) => write!(f, "assertion failed: {msg}"),
            Self::Format(s) => write!(f, "format error: {s}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigSerialize(e) => write!(f, "serialize error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidSeverity(s) => write!(f, "invalid severity: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::ConfigSerialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Self::ConfigSerialize(e)
    }
}
