//! chanlog's own diagnostics (config loading, CLI and shell problems), routed
//! through a process-wide gate.
//!
//! The gate lives in a `OnceLock<Mutex<_>>`: the first init call wins and
//! calls made before that are dropped. It takes its threshold and colors from
//! the config but never the user's `[channels]`, so `CLI`, `CONFIG`, `SHELL`
//! and the rest always stay enabled.

use crate::config::Config;
use crate::gate::LogGate;
use crate::level::Severity;
use std::sync::{Mutex, OnceLock, PoisonError};

static INTERNAL_GATE: OnceLock<Mutex<LogGate>> = OnceLock::new();

/// Reuses an already-loaded config to avoid reading it twice.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_GATE.get().is_some();
    INTERNAL_GATE.get_or_init(|| Mutex::new(build_internal_gate(config)));
    if !was_init {
        info(
            "INTERNAL",
            &format!("Internal diagnostics at {}", config.parse_internal_level()),
        );
    }
}

fn build_internal_gate(config: &Config) -> LogGate {
    LogGate::builder()
        .enabled(true)
        .threshold(config.parse_internal_level())
        .default_channel_state(true)
        .console()
        .colors(config.console.colors)
        .done()
        .build()
}

fn log(severity: Severity, channel: &str, msg: &str) {
    if let Some(gate) = INTERNAL_GATE.get() {
        gate.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .log(severity, Some(channel), msg, None);
    }
}

pub fn info(channel: &str, msg: &str) {
    log(Severity::Info, channel, msg);
}

pub fn warning(channel: &str, msg: &str) {
    log(Severity::Warning, channel, msg);
}

pub fn error(channel: &str, msg: &str) {
    log(Severity::Error, channel, msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChannelSettings;

    #[test]
    fn internal_channels_ignore_user_channel_map() {
        let mut config = Config::default();
        config.channels = ChannelSettings {
            default_state: false,
            ..ChannelSettings::default().channel("CLI", false)
        };

        let mut gate = build_internal_gate(&config);
        assert!(gate.should_emit(Severity::Error, Some("CLI")));
        assert!(gate.should_emit(Severity::Warning, Some("SHELL")));
        assert!(!gate.should_emit(Severity::Info, Some("CONFIG")));
    }
}
