//! `format!`-style logging through a gate. The arguments are only formatted
//! when the call passes both gates.
//!
//! ```
//! use chanlog::{LogGate, MemorySink, info, warning};
//!
//! let sink = MemorySink::new();
//! let mut gate = LogGate::builder().enabled(true).sink(sink.clone()).build();
//! gate.set_channel_enabled("AI", false);
//!
//! info!(gate, "loaded {} entities", 3);
//! warning!(gate, channel = "AI", "path blocked at {:?}", (4, 2));
//!
//! assert_eq!(sink.messages(), ["loaded 3 entities"]);
//! ```

/// Logs at an explicit severity: `log!(gate, Severity::Info, channel = "AI", "...", args)`.
#[macro_export]
macro_rules! log {
    ($gate:expr, $severity:expr, channel = $channel:expr, $($arg:tt)+) => {
        $gate.log_args($severity, ::core::option::Option::Some($channel), ::core::format_args!($($arg)+), ::core::option::Option::None)
    };
    ($gate:expr, $severity:expr, $($arg:tt)+) => {
        $gate.log_args($severity, ::core::option::Option::None, ::core::format_args!($($arg)+), ::core::option::Option::None)
    };
}

#[macro_export]
macro_rules! info {
    ($gate:expr, $($rest:tt)+) => {
        $crate::log!($gate, $crate::Severity::Info, $($rest)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($gate:expr, $($rest:tt)+) => {
        $crate::log!($gate, $crate::Severity::Warning, $($rest)+)
    };
}

#[macro_export]
macro_rules! error {
    ($gate:expr, $($rest:tt)+) => {
        $crate::log!($gate, $crate::Severity::Error, $($rest)+)
    };
}
