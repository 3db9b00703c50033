//! Each subcommand lives in its own file and owns its error reporting.

mod channels;
mod log;

pub use channels::{cmd_channels, cmd_default, cmd_set_channel, format_channel_line};
pub use log::{cmd_format, cmd_log};
