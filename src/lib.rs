//! `chanlog` - leveled, channel-gated logging.
//!
//! Every call passes two independent gates before it reaches a sink:
//! - a master switch plus a severity threshold (`None < Exception < Error < Warning < Info`)
//! - an optional named channel, registered with the default state the first time it is used
//!
//! # Example
//!
//! ```
//! use chanlog::{ChannelSettings, LogGate, MemorySink, Severity};
//!
//! let sink = MemorySink::new();
//! let mut gate = LogGate::builder()
//!     .enabled(true)
//!     .threshold(Severity::Info)
//!     .seed(Some(ChannelSettings::default().channel("AI", false)))
//!     .sink(sink.clone())
//!     .build();
//!
//! gate.info_in("AI", "hidden");
//! gate.info_in("Physics", "shown");
//! assert_eq!(gate.channels().get("Physics"), Some(true));
//! assert_eq!(sink.messages(), ["shown"]);
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `chanlog` binary and its interactive shell

pub mod channel;
pub mod config;
mod error;
pub mod fmt;
pub mod gate;
pub mod internal;
pub mod level;
mod macros;
pub mod sink;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub mod shell;

pub use channel::ChannelRegistry;
pub use config::{ChannelSettings, Config};
pub use error::Error;
pub use gate::{DEFAULT_ASSERT_MESSAGE, GateBuilder, LogGate};
pub use level::Severity;
pub use sink::{CapturedRecord, ConsoleSink, Context, MemorySink, NullSink, Record, Sink};
