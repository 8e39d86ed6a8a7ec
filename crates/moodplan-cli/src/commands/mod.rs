pub mod config;
pub mod moods;
pub mod plan;

use std::path::{Path, PathBuf};

use moodplan_core::{Config, ConfigError};

/// Resolve the config path: explicit flag, else the per-user default.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::default_path(),
    }
}

/// Load config from the resolved path; a missing file yields defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    Config::load_from(&config_path(explicit)?)
}
