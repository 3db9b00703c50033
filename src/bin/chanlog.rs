//! `chanlog` binary: one-shot logging, channel editing, and the interactive shell.
//!
//! Usage:
//!   chanlog                                        Enter interactive shell
//!   chanlog log [-c CHANNEL] <severity> <msg...>   Log a message
//!   chanlog format [-c CHANNEL] <severity> <template> [args...]
//!   chanlog channels                               List persisted channels
//!   chanlog enable|disable <channel>               Toggle a channel in the config
//!   chanlog default <on|off>                       State for unseen channels

use chanlog::LogGate;
use chanlog::cli::{
    Cli, Command, cmd_channels, cmd_default, cmd_format, cmd_log, cmd_set_channel, load_config,
};
use chanlog::internal;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The config seeds both the internal diagnostics gate and the user's gate
    let (path, mut config) = match load_config(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };
    internal::init_with_config(&config);

    let seed = !cli.no_seed;
    match cli.command.unwrap_or(Command::Shell) {
        Command::Log {
            channel,
            severity,
            message,
        } => {
            let mut gate = LogGate::from_config_seeded(&config, seed);
            cmd_log(&mut gate, channel.as_deref(), severity.into(), &message)
        }
        Command::Format {
            channel,
            severity,
            template,
            args,
        } => {
            let mut gate = LogGate::from_config_seeded(&config, seed);
            cmd_format(
                &mut gate,
                channel.as_deref(),
                severity.into(),
                &template,
                &args,
            )
        }
        Command::Channels => cmd_channels(&config),
        Command::Enable { channel } => cmd_set_channel(&mut config, &path, &channel, true),
        Command::Disable { channel } => cmd_set_channel(&mut config, &path, &channel, false),
        Command::SetDefault { state } => cmd_default(&mut config, &path, state.into()),
        Command::Shell => match chanlog::shell::run(config, path, seed) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                internal::error("SHELL", &format!("Shell error: {e}"));
                ExitCode::FAILURE
            }
        },
    }
}
