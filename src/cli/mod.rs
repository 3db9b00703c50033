//! Command-line interface for chanlog.

pub mod commands;
pub mod util;

use crate::level::Severity;
use clap::{Parser, Subcommand};

/// Severities a message can be logged at (`none` is a threshold only).
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SeverityArg {
    Exception,
    Error,
    Warning,
    Info,
}

impl From<SeverityArg> for Severity {
    fn from(severity: SeverityArg) -> Self {
        match severity {
            SeverityArg::Exception => Self::Exception,
            SeverityArg::Error => Self::Error,
            SeverityArg::Warning => Self::Warning,
            SeverityArg::Info => Self::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StateArg {
    On,
    Off,
}

impl From<StateArg> for bool {
    fn from(state: StateArg) -> Self {
        state == StateArg::On
    }
}

/// chanlog - channel-gated logging from the command line.
#[derive(Parser)]
#[command(name = "chanlog", version, about = "Channel-gated logging from the command line")]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,
    /// Start with an empty channel map instead of the persisted one
    #[arg(long, global = true)]
    pub no_seed: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log a message.
    Log {
        /// Channel to log to
        #[arg(short, long)]
        channel: Option<String>,
        #[arg(value_enum)]
        severity: SeverityArg,
        message: Vec<String>,
    },
    /// Log a positional template such as "{0} took {1}ms".
    Format {
        #[arg(short, long)]
        channel: Option<String>,
        #[arg(value_enum)]
        severity: SeverityArg,
        template: String,
        args: Vec<String>,
    },
    /// List persisted channels and the default state.
    Channels,
    /// Enable a channel and save the config.
    Enable { channel: String },
    /// Disable a channel and save the config.
    Disable { channel: String },
    /// Set the state new channels start with and save the config.
    #[command(name = "default")]
    SetDefault {
        #[arg(value_enum)]
        state: StateArg,
    },
    /// Interactive shell (the default without a subcommand).
    Shell,
}

pub use commands::{cmd_channels, cmd_default, cmd_format, cmd_log, cmd_set_channel};
pub use util::{config_path, load_config};
