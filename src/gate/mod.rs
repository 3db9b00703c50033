//! The single choke point between callers and the sink.
//!
//! Every call passes two independent checks composed with AND:
//!
//! ```text
//! severity_pass(level) = enabled && threshold != None && level <= threshold
//! channel_pass(name)   = name is None || channels.is_enabled(name)
//! ```
//!
//! The severity check runs first and short-circuits, so a call that the master
//! switch or the threshold suppresses never registers its channel.

mod builder;
mod from_config;

pub use builder::{ConsoleBuilder, GateBuilder};

use crate::channel::ChannelRegistry;
use crate::fmt::MessageTemplate;
use crate::level::Severity;
use crate::sink::{Context, Record, Sink};
use std::fmt::{self, Display, Write as _};

/// Message used by [`LogGate::ensure`].
pub const DEFAULT_ASSERT_MESSAGE: &str = "Statement is false!";

/// Master switch, severity threshold, channel registry, and the sink behind them.
///
/// Constructed once by the application and passed to whoever logs. Mutating
/// calls take `&mut self`; wrap the gate in a `Mutex` to share it across threads.
pub struct LogGate {
    enabled: bool,
    threshold: Severity,
    channels: ChannelRegistry,
    sink: Box<dyn Sink>,
}

impl Default for LogGate {
    fn default() -> Self {
        GateBuilder::new().build()
    }
}

impl fmt::Debug for LogGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogGate")
            .field("enabled", &self.enabled)
            .field("threshold", &self.threshold)
            .field("channels", &self.channels)
            .finish_non_exhaustive()
    }
}

impl LogGate {
    /// Starts a [`GateBuilder`] with debug-build defaults.
    #[must_use]
    pub fn builder() -> GateBuilder {
        GateBuilder::new()
    }

    /// Gate with default settings writing to `sink`.
    #[must_use]
    pub fn new(sink: impl Sink + 'static) -> Self {
        GateBuilder::new().sink(sink).build()
    }

    // -- gating -------------------------------------------------------------

    /// Master switch and threshold only; never touches the channel registry.
    #[must_use]
    pub fn severity_pass(&self, level: Severity) -> bool {
        self.enabled && level.within(self.threshold)
    }

    /// `None` bypasses the channel check. A named channel is registered on first use.
    pub fn channel_pass(&mut self, channel: Option<&str>) -> bool {
        channel.is_none_or(|name| self.channels.is_enabled(name))
    }

    /// Full decision for one call.
    pub fn should_emit(&mut self, level: Severity, channel: Option<&str>) -> bool {
        self.severity_pass(level) && self.channel_pass(channel)
    }

    // -- core dispatch ------------------------------------------------------

    /// Writes `message` if the call passes both gates.
    pub fn log(
        &mut self,
        severity: Severity,
        channel: Option<&str>,
        message: &str,
        context: Option<&dyn Context>,
    ) {
        if self.should_emit(severity, channel) {
            self.dispatch(severity, channel, message, context);
        }
    }

    /// Like [`log`](Self::log) but the message is only built when it will be written.
    /// The `info!`/`warning!`/`error!` macros expand to this.
    pub fn log_args(
        &mut self,
        severity: Severity,
        channel: Option<&str>,
        args: fmt::Arguments<'_>,
        context: Option<&dyn Context>,
    ) {
        if !self.should_emit(severity, channel) {
            return;
        }
        match args.as_str() {
            Some(message) => self.dispatch(severity, channel, message, context),
            None => self.dispatch(severity, channel, &args.to_string(), context),
        }
    }

    /// Runtime positional template (`"{0} took {1}ms"`).
    ///
    /// Suppressed calls never parse the template, so a bad template on a disabled
    /// channel is not an error.
    ///
    /// # Errors
    /// [`crate::Error::Format`] when an emitted call has a malformed template or too few arguments.
    pub fn log_format(
        &mut self,
        severity: Severity,
        channel: Option<&str>,
        template: &str,
        args: &[&dyn Display],
        context: Option<&dyn Context>,
    ) -> Result<(), crate::Error> {
        if !self.should_emit(severity, channel) {
            return Ok(());
        }
        let message = MessageTemplate::parse(template)?.render(args)?;
        self.dispatch(severity, channel, &message, context);
        Ok(())
    }

    /// Exception-level record built from `error` and its `source()` chain.
    pub fn log_exception(
        &mut self,
        channel: Option<&str>,
        error: &dyn std::error::Error,
        context: Option<&dyn Context>,
    ) {
        if !self.should_emit(Severity::Exception, channel) {
            return;
        }
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            let _ = write!(message, "\n  caused by: {cause}");
            source = cause.source();
        }
        self.dispatch(Severity::Exception, channel, &message, context);
    }

    fn dispatch(
        &self,
        severity: Severity,
        channel: Option<&str>,
        message: &str,
        context: Option<&dyn Context>,
    ) {
        self.sink.write(&Record {
            severity,
            channel,
            message,
            context,
        });
    }

    // -- per-severity shorthands --------------------------------------------

    /// Routine progress: state changes, loaded assets, finished steps.
    pub fn info(&mut self, message: &str) {
        self.log(Severity::Info, None, message, None);
    }

    /// [`info`](Self::info) filtered by `channel`.
    pub fn info_in(&mut self, channel: &str, message: &str) {
        self.log(Severity::Info, Some(channel), message, None);
    }

    /// # Errors
    /// See [`log_format`](Self::log_format).
    pub fn info_format(
        &mut self,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<(), crate::Error> {
        self.log_format(Severity::Info, None, template, args, None)
    }

    /// # Errors
    /// See [`log_format`](Self::log_format).
    pub fn info_format_in(
        &mut self,
        channel: &str,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<(), crate::Error> {
        self.log_format(Severity::Info, Some(channel), template, args, None)
    }

    /// Something looks off but the caller can carry on.
    pub fn warning(&mut self, message: &str) {
        self.log(Severity::Warning, None, message, None);
    }

    /// [`warning`](Self::warning) filtered by `channel`.
    pub fn warning_in(&mut self, channel: &str, message: &str) {
        self.log(Severity::Warning, Some(channel), message, None);
    }

    /// # Errors
    /// See [`log_format`](Self::log_format).
    pub fn warning_format(
        &mut self,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<(), crate::Error> {
        self.log_format(Severity::Warning, None, template, args, None)
    }

    /// # Errors
    /// See [`log_format`](Self::log_format).
    pub fn warning_format_in(
        &mut self,
        channel: &str,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<(), crate::Error> {
        self.log_format(Severity::Warning, Some(channel), template, args, None)
    }

    /// A failure the caller is reporting but not unwinding from.
    pub fn error(&mut self, message: &str) {
        self.log(Severity::Error, None, message, None);
    }

    /// [`error`](Self::error) filtered by `channel`.
    pub fn error_in(&mut self, channel: &str, message: &str) {
        self.log(Severity::Error, Some(channel), message, None);
    }

    /// # Errors
    /// See [`log_format`](Self::log_format).
    pub fn error_format(
        &mut self,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<(), crate::Error> {
        self.log_format(Severity::Error, None, template, args, None)
    }

    /// # Errors
    /// See [`log_format`](Self::log_format).
    pub fn error_format_in(
        &mut self,
        channel: &str,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<(), crate::Error> {
        self.log_format(Severity::Error, Some(channel), template, args, None)
    }

    /// Reports a caught error with its cause chain.
    pub fn exception(&mut self, error: &dyn std::error::Error) {
        self.log_exception(None, error, None);
    }

    /// [`exception`](Self::exception) filtered by `channel`.
    pub fn exception_in(&mut self, channel: &str, error: &dyn std::error::Error) {
        self.log_exception(Some(channel), error, None);
    }

    // -- assertions ---------------------------------------------------------

    /// Fails with [`crate::Error::AssertionFailed`] when enabled and `condition` is false.
    /// A disabled gate skips the check entirely.
    ///
    /// # Errors
    /// The failed assertion, carrying `message`.
    pub fn assert(&self, condition: bool, message: impl Into<String>) -> Result<(), crate::Error> {
        if self.enabled && !condition {
            return Err(crate::Error::AssertionFailed(message.into()));
        }
        Ok(())
    }

    /// [`assert`](Self::assert) with [`DEFAULT_ASSERT_MESSAGE`].
    ///
    /// # Errors
    /// The failed assertion.
    pub fn ensure(&self, condition: bool) -> Result<(), crate::Error> {
        self.assert(condition, DEFAULT_ASSERT_MESSAGE)
    }

    /// Reports a missing value at Error severity. Only the master switch applies;
    /// the threshold and channels are not consulted, and nothing is ever returned as an error.
    pub fn assert_not_null<T: ?Sized>(&self, value: Option<&T>, name: &str, context: &dyn Context) {
        if self.enabled && value.is_none() {
            let message = format!(
                "{name} in object {} ( {} ) is null!",
                context.name(),
                context.type_name()
            );
            self.dispatch(Severity::Error, None, &message, Some(context));
        }
    }

    // -- state --------------------------------------------------------------

    /// Master switch. Off suppresses everything, assertions included.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Flips the master switch at runtime.
    pub const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Least severe level that still gets through.
    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// `Severity::None` silences every call.
    pub const fn set_threshold(&mut self, threshold: Severity) {
        self.threshold = threshold;
    }

    /// Every channel seen so far, for listings and saving.
    #[must_use]
    pub const fn channels(&self) -> &ChannelRegistry {
        &self.channels
    }

    /// Direct access for bulk edits such as seeding.
    pub const fn channels_mut(&mut self) -> &mut ChannelRegistry {
        &mut self.channels
    }

    /// Toggles one channel, registering it if it was never seen.
    pub fn set_channel_enabled(&mut self, channel: impl Into<String>, enabled: bool) {
        self.channels.set_enabled(channel, enabled);
    }

    /// State an unseen channel gets on first use.
    #[must_use]
    pub const fn default_channel_state(&self) -> bool {
        self.channels.default_state()
    }

    /// Only affects channels registered after this call.
    pub const fn set_default_channel_state(&mut self, state: bool) {
        self.channels.set_default_state(state);
    }
}
