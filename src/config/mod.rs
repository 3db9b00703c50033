//! TOML configuration: the master switch, threshold, persisted channel states,
//! and console options. Loading is separate from the struct definitions so the
//! file handling stays independent of the serde schema.

mod structs;

pub use structs::{ChannelSettings, ConsoleConfig, GeneralConfig};

use crate::fmt::Color;
use crate::internal;
use crate::level::Severity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Every field has a default, so an empty or missing file still yields a working gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub channels: ChannelSettings,
    pub console: ConsoleConfig,
}

impl Config {
    /// Loads from the default location.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        Self::load_from(&path)
    }

    /// A missing file is not an error: it yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::info(
                "CONFIG",
                &format!("{} not found, using defaults", path.display()),
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        internal::info(
            "CONFIG",
            &format!(
                "Config loaded from {} ({} channels)",
                path.display(),
                config.channels.state.len()
            ),
        );
        Ok(config)
    }

    /// Writes the config back as TOML, creating parent directories as needed.
    ///
    /// # Errors
    /// Serialization or I/O failure.
    pub fn save_to(&self, path: &Path) -> Result<(), crate::Error> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        internal::info("CONFIG", &format!("Config saved to {}", path.display()));
        Ok(())
    }

    /// `~/.config/chanlog/chanlog.toml` on Linux, the platform equivalent elsewhere.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "chanlog")
            .map(|dirs| dirs.config_dir().join("chanlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Expands `~` and environment variables in a user-supplied path.
    #[must_use]
    pub fn expand_path(path: &str) -> PathBuf {
        let expanded = shellexpand::full(path).map_or_else(
            |_| shellexpand::tilde(path).into_owned(),
            std::borrow::Cow::into_owned,
        );
        PathBuf::from(expanded)
    }

    /// Master switch with the build-type fallback.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.general.enabled.unwrap_or(cfg!(debug_assertions))
    }

    /// Unknown strings fall back to `Info` with a warning.
    #[must_use]
    pub fn parse_level(&self) -> Severity {
        parse_or_warn(&self.general.level, Severity::Info)
    }

    #[must_use]
    pub fn parse_internal_level(&self) -> Severity {
        parse_or_warn(&self.general.internal_level, Severity::Warning)
    }

    /// Palette entries with a recognized severity name.
    #[must_use]
    pub fn palette(&self) -> Vec<(Severity, Color)> {
        let mut palette = Vec::new();
        for (name, hex) in &self.console.palette {
            match name.parse::<Severity>() {
                Ok(severity) => palette.push((severity, Color::from_hex(hex))),
                Err(e) => internal::warning("CONFIG", &format!("Ignoring palette entry: {e}")),
            }
        }
        palette
    }
}

fn parse_or_warn(value: &str, fallback: Severity) -> Severity {
    value.parse().unwrap_or_else(|e| {
        internal::warning("CONFIG", &format!("{e}, using {fallback}"));
        fallback
    })
}
