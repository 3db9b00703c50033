//! Configuration struct definitions.

use crate::channel::ChannelRegistry;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// General configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Master switch. Unset means "enabled in debug builds only".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Severity threshold.
    pub level: String,
    /// Threshold for chanlog's own diagnostics.
    pub internal_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            enabled: None,
            level: "info".to_string(),
            internal_level: "warning".to_string(),
        }
    }
}

/// Persisted channel states: the `[channels]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelSettings {
    /// State given to channels with no entry in `state`.
    pub default_state: bool,
    /// Channel name → enabled. Ordered so saved files diff cleanly.
    pub state: BTreeMap<String, bool>,
}

impl Default for ChannelSettings {
    fn default() -> Self {
        Self {
            default_state: true,
            state: BTreeMap::new(),
        }
    }
}

impl ChannelSettings {
    /// Captures every channel a registry has seen, for writing back to disk.
    #[must_use]
    pub fn from_registry(registry: &ChannelRegistry) -> Self {
        Self {
            default_state: registry.default_state(),
            state: registry
                .iter()
                .map(|(name, enabled)| (name.to_string(), enabled))
                .collect(),
        }
    }

    /// Fluent helper for building settings in code.
    #[must_use]
    pub fn channel(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.state.insert(name.into(), enabled);
        self
    }
}

/// Console sink configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable ANSI colors.
    pub colors: bool,
    /// Line layout template.
    pub layout: String,
    /// strftime pattern for `{timestamp}`.
    pub timestamp_format: String,
    /// Severity name → `#RRGGBB`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub palette: HashMap<String, String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            colors: true,
            layout: crate::fmt::DEFAULT_LAYOUT.to_string(),
            timestamp_format: "%H:%M:%S".to_string(),
            palette: HashMap::new(),
        }
    }
}
