//! Gate construction from a loaded [`Config`].

use super::{GateBuilder, LogGate};
use crate::config::Config;
use crate::internal;

impl LogGate {
    /// Console-backed gate seeded with the config's channel states.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::from_config_seeded(config, true)
    }

    /// `seed = false` ignores the persisted channel states and starts with an
    /// empty registry using the configured default state.
    #[must_use]
    pub fn from_config_seeded(config: &Config, seed: bool) -> Self {
        let threshold = config.parse_level();
        internal::info(
            "GATE",
            &format!(
                "enabled={} threshold={threshold} default_channel_state={}",
                config.enabled(),
                config.channels.default_state
            ),
        );

        let seed = seed.then(|| config.channels.clone());
        if let Some(settings) = &seed {
            internal::info(
                "GATE",
                &format!("Seeding {} channels", settings.state.len()),
            );
        }

        Self::configure_console(GateBuilder::new(), config)
            .enabled(config.enabled())
            .threshold(threshold)
            .default_channel_state(config.channels.default_state)
            .seed(seed)
            .build()
    }

    fn configure_console(builder: GateBuilder, config: &Config) -> GateBuilder {
        let mut console = builder
            .console()
            .colors(config.console.colors)
            .layout(&config.console.layout)
            .timestamp_format(&config.console.timestamp_format);

        for (severity, color) in config.palette() {
            console = console.severity_color(severity, color);
        }

        console.done()
    }
}
