//! One-shot logging through a gate built from config.

use crate::gate::LogGate;
use crate::internal;
use crate::level::Severity;
use std::fmt::Display;
use std::process::ExitCode;

/// Handles `chanlog log [-c CHANNEL] <severity> <message...>`.
#[must_use]
pub fn cmd_log(
    gate: &mut LogGate,
    channel: Option<&str>,
    severity: Severity,
    message: &[String],
) -> ExitCode {
    if message.is_empty() {
        internal::warning("CLI", "Usage: chanlog log [-c CHANNEL] <severity> <message>");
        return ExitCode::FAILURE;
    }
    gate.log(severity, channel, &message.join(" "), None);
    ExitCode::SUCCESS
}

/// Handles `chanlog format [-c CHANNEL] <severity> <template> [args...]`.
#[must_use]
pub fn cmd_format(
    gate: &mut LogGate,
    channel: Option<&str>,
    severity: Severity,
    template: &str,
    args: &[String],
) -> ExitCode {
    let args: Vec<&dyn Display> = args.iter().map(|a| a as &dyn Display).collect();
    match gate.log_format(severity, channel, template, &args, None) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("CLI", &e.to_string());
            ExitCode::FAILURE
        }
    }
}
