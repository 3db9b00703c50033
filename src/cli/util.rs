//! Config path resolution shared by the CLI commands and the shell.

use crate::config::Config;
use std::path::PathBuf;

/// `--config` wins; otherwise the platform default.
///
/// # Errors
/// No `--config` and no platform config directory.
pub fn config_path(explicit: Option<&str>) -> Result<PathBuf, crate::Error> {
    explicit.map_or_else(Config::get_config_path, |path| Ok(Config::expand_path(path)))
}

/// # Errors
/// Path resolution, read, or parse failure.
pub fn load_config(explicit: Option<&str>) -> Result<(PathBuf, Config), crate::Error> {
    let path = config_path(explicit)?;
    let config = Config::load_from(&path)?;
    Ok((path, config))
}
