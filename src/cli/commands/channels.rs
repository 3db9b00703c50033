//! Channel editing: the persisted `[channels]` section of the config.

use crate::config::Config;
use crate::fmt::{Color, colorize};
use crate::internal;
use std::path::Path;
use std::process::ExitCode;

/// One listing line, e.g. `  on   Physics`.
#[must_use]
pub fn format_channel_line(name: &str, enabled: bool, colors: bool) -> String {
    let state = if enabled { "on " } else { "off" };
    let state = if colors {
        colorize(state, if enabled { Color::green() } else { Color::red() })
    } else {
        state.to_string()
    };
    format!("  {state}  {name}")
}

/// Handles `chanlog channels`.
#[must_use]
pub fn cmd_channels(config: &Config) -> ExitCode {
    let colors = config.console.colors;
    println!(
        "default: {}",
        if config.channels.default_state { "on" } else { "off" }
    );
    if config.channels.state.is_empty() {
        println!("  (no channels configured)");
    }
    for (name, &enabled) in &config.channels.state {
        println!("{}", format_channel_line(name, enabled, colors));
    }
    ExitCode::SUCCESS
}

/// Handles `chanlog enable <channel>` and `chanlog disable <channel>`.
#[must_use]
pub fn cmd_set_channel(config: &mut Config, path: &Path, channel: &str, enabled: bool) -> ExitCode {
    if channel.is_empty() {
        internal::warning("CLI", "Channel name must not be empty");
        return ExitCode::FAILURE;
    }
    config.channels.state.insert(channel.to_string(), enabled);
    save(config, path)
}

/// Handles `chanlog default <on|off>`.
#[must_use]
pub fn cmd_default(config: &mut Config, path: &Path, state: bool) -> ExitCode {
    config.channels.default_state = state;
    save(config, path)
}

fn save(config: &Config, path: &Path) -> ExitCode {
    match config.save_to(path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("CLI", &format!("Could not save {}: {e}", path.display()));
            ExitCode::FAILURE
        }
    }
}
