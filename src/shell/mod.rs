//! chanlog interactive shell.
//!
//! Keeps one gate alive across commands, so lazily registered channels and
//! runtime toggles can be inspected and then saved back to the config.

use crate::cli::commands::format_channel_line;
use crate::config::{ChannelSettings, Config};
use crate::gate::LogGate;
use crate::internal;
use crate::level::Severity;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand<'a> {
    Log {
        severity: Severity,
        channel: Option<&'a str>,
        message: String,
    },
    Enable(&'a str),
    Disable(&'a str),
    Default(bool),
    Level(Severity),
    /// `on` / `off`: the master switch.
    Switch(bool),
    Channels,
    Save,
    Help,
    Quit,
}

/// Parses one non-empty line. `Err` carries a usage message.
///
/// # Errors
/// Unknown command or missing arguments.
pub fn parse_command(line: &str) -> Result<ShellCommand<'_>, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return Err("empty command".to_string());
    };
    let rest = &parts[1..];

    match head {
        "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
        "help" | "?" => Ok(ShellCommand::Help),
        "channels" => Ok(ShellCommand::Channels),
        "save" => Ok(ShellCommand::Save),
        "on" => Ok(ShellCommand::Switch(true)),
        "off" => Ok(ShellCommand::Switch(false)),
        "enable" | "disable" => match rest {
            [channel] if head == "enable" => Ok(ShellCommand::Enable(*channel)),
            [channel] => Ok(ShellCommand::Disable(*channel)),
            _ => Err(format!("Usage: {head} <channel>")),
        },
        "default" => match rest {
            ["on"] => Ok(ShellCommand::Default(true)),
            ["off"] => Ok(ShellCommand::Default(false)),
            _ => Err("Usage: default <on|off>".to_string()),
        },
        "level" => match rest {
            [level] => level
                .parse()
                .map(ShellCommand::Level)
                .map_err(|e| e.to_string()),
            _ => Err("Usage: level <none|exception|error|warning|info>".to_string()),
        },
        "info" | "warning" | "warn" | "error" | "exception" => {
            let severity: Severity = head.parse().map_err(|e| format!("{e}"))?;
            let (channel, words) = match rest {
                [first, tail @ ..] if first.len() > 1 && first.starts_with('@') => {
                    let first: &str = *first;
                    (Some(&first[1..]), tail)
                }
                _ => (None, rest),
            };
            if words.is_empty() {
                return Err(format!("Usage: {head} [@channel] <message>"));
            }
            Ok(ShellCommand::Log {
                severity,
                channel,
                message: words.join(" "),
            })
        }
        _ => Err(format!("Unknown command: {head} (type 'help')")),
    }
}

/// Gate plus the config it was built from, so `save` can write edits back.
pub struct Session {
    gate: LogGate,
    config: Config,
    path: PathBuf,
    seeded: bool,
}

impl Session {
    #[must_use]
    pub fn new(config: Config, path: PathBuf, seed: bool) -> Self {
        let gate = LogGate::from_config_seeded(&config, seed);
        Self {
            gate,
            config,
            path,
            seeded: seed,
        }
    }

    #[must_use]
    pub const fn gate(&self) -> &LogGate {
        &self.gate
    }

    /// Runs one command; returns `false` when the shell should exit.
    pub fn execute(&mut self, command: ShellCommand<'_>) -> bool {
        match command {
            ShellCommand::Quit => return false,
            ShellCommand::Help => print_help(),
            ShellCommand::Log {
                severity,
                channel,
                message,
            } => self.gate.log(severity, channel, &message, None),
            ShellCommand::Enable(channel) => self.gate.set_channel_enabled(channel, true),
            ShellCommand::Disable(channel) => self.gate.set_channel_enabled(channel, false),
            ShellCommand::Default(state) => self.gate.set_default_channel_state(state),
            ShellCommand::Level(level) => self.gate.set_threshold(level),
            ShellCommand::Switch(enabled) => self.gate.set_enabled(enabled),
            ShellCommand::Channels => self.print_channels(),
            ShellCommand::Save => self.save(),
        }
        true
    }

    fn print_channels(&self) {
        let gate = &self.gate;
        println!(
            "enabled: {}  threshold: {}  default: {}",
            gate.enabled(),
            gate.threshold(),
            if gate.default_channel_state() { "on" } else { "off" }
        );
        for (name, enabled) in gate.channels().sorted() {
            println!(
                "{}",
                format_channel_line(name, enabled, self.config.console.colors)
            );
        }
    }

    /// Writes the current switch, threshold, and every registered channel to the config file.
    ///
    /// An unseeded session only knows the channels it touched, so those are merged
    /// into the persisted map instead of replacing it.
    fn save(&mut self) {
        self.config.general.enabled = Some(self.gate.enabled());
        self.config.general.level = self.gate.threshold().to_string();
        let current = ChannelSettings::from_registry(self.gate.channels());
        if self.seeded {
            self.config.channels = current;
        } else {
            self.config.channels.default_state = current.default_state;
            self.config.channels.state.extend(current.state);
        }
        if let Err(e) = self.config.save_to(&self.path) {
            internal::error("SHELL", &format!("Could not save: {e}"));
        }
    }
}

/// Runs the interactive shell.
///
/// # Errors
/// Returns error message if the line editor cannot be initialized.
pub fn run(config: Config, path: PathBuf, seed: bool) -> Result<(), String> {
    let mut session = Session::new(config, path, seed);
    let mut rl = DefaultEditor::new().map_err(|e| format!("Error creating editor: {e}"))?;

    let history_path = get_history_path();
    if let Some(path) = &history_path {
        let _ = rl.load_history(path);
    }

    println!("chanlog shell - type 'help' for commands, 'quit' to exit");

    loop {
        match rl.readline("chanlog> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match parse_command(line) {
                    Ok(command) => {
                        if !session.execute(command) {
                            break;
                        }
                    }
                    Err(usage) => internal::warning("SHELL", &usage),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                internal::error("SHELL", &format!("Readline error: {e}"));
                break;
            }
        }
    }

    if let Some(path) = &history_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if rl.save_history(path).is_err() {
            internal::warning("SHELL", "Could not save history");
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "Commands:
  info|warning|error|exception [@channel] <message>   Log a message
  enable <channel>                                     Enable a channel
  disable <channel>                                    Disable a channel
  default <on|off>                                     State for channels seen from now on
  level <severity>                                     Set the threshold
  on | off                                             Master switch
  channels                                             Show gate state and channels
  save                                                 Write state back to the config file
  help, ?                                              Show this help
  quit, exit, q                                        Exit shell

Severities: none, exception, error, warning, info"
    );
}

fn get_history_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "chanlog")
        .map(|dirs| dirs.data_dir().join("shell_history"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_channel_qualified_log() {
        let cmd = parse_command("warning @Physics body fell through floor").unwrap();
        assert_eq!(
            cmd,
            ShellCommand::Log {
                severity: Severity::Warning,
                channel: Some("Physics"),
                message: "body fell through floor".to_string(),
            }
        );
    }

    #[test]
    fn parses_log_without_channel() {
        let cmd = parse_command("info ready").unwrap();
        assert_eq!(
            cmd,
            ShellCommand::Log {
                severity: Severity::Info,
                channel: None,
                message: "ready".to_string(),
            }
        );
    }

    #[test]
    fn bare_at_sign_is_part_of_message() {
        let cmd = parse_command("info @ sign").unwrap();
        assert!(matches!(cmd, ShellCommand::Log { channel: None, .. }));
    }

    #[test]
    fn log_requires_message() {
        assert!(parse_command("error @AI").is_err());
    }

    #[test]
    fn parses_toggles() {
        assert_eq!(parse_command("enable AI").unwrap(), ShellCommand::Enable("AI"));
        assert_eq!(parse_command("disable AI").unwrap(), ShellCommand::Disable("AI"));
        assert_eq!(parse_command("default off").unwrap(), ShellCommand::Default(false));
        assert_eq!(parse_command("off").unwrap(), ShellCommand::Switch(false));
        assert_eq!(
            parse_command("level warn").unwrap(),
            ShellCommand::Level(Severity::Warning)
        );
    }

    #[test]
    fn rejects_unknown_command() {
        assert!(parse_command("frobnicate").is_err());
        assert!(parse_command("level loud").is_err());
    }

    #[test]
    fn session_registers_channels_lazily() {
        let config = Config {
            general: crate::config::GeneralConfig {
                enabled: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut session = Session::new(config, PathBuf::from("unused.toml"), true);
        let cmd = parse_command("info @Audio muted").unwrap();
        assert!(session.execute(cmd));
        assert_eq!(session.gate().channels().get("Audio"), Some(true));
        assert!(!session.execute(ShellCommand::Quit));
    }

    fn enabled_config() -> Config {
        Config {
            general: crate::config::GeneralConfig {
                enabled: Some(true),
                ..Default::default()
            },
            channels: ChannelSettings::default()
                .channel("AI", false)
                .channel("Audio", true),
            ..Default::default()
        }
    }

    #[test]
    fn unseeded_save_keeps_untouched_channels() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("chanlog.toml");
        let config = enabled_config();
        config.save_to(&path).unwrap();

        let mut session = Session::new(config, path.clone(), false);
        assert!(session.gate().channels().is_empty());
        assert!(session.execute(parse_command("level warn").unwrap()));
        assert!(session.execute(parse_command("warning @Physics fell").unwrap()));
        assert!(session.execute(parse_command("disable Audio").unwrap()));
        assert!(session.execute(ShellCommand::Save));

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.general.level, "warning");
        assert_eq!(reloaded.channels.state.get("AI"), Some(&false));
        assert_eq!(reloaded.channels.state.get("Audio"), Some(&false));
        assert_eq!(reloaded.channels.state.get("Physics"), Some(&true));
    }

    #[test]
    fn seeded_save_writes_registry() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("chanlog.toml");

        let mut session = Session::new(enabled_config(), path.clone(), true);
        assert!(session.execute(parse_command("enable AI").unwrap()));
        assert!(session.execute(parse_command("default off").unwrap()));
        assert!(session.execute(ShellCommand::Save));

        let reloaded = Config::load_from(&path).unwrap();
        assert!(!reloaded.channels.default_state);
        assert_eq!(reloaded.channels.state.get("AI"), Some(&true));
        assert_eq!(reloaded.channels.state.get("Audio"), Some(&true));
    }
}
