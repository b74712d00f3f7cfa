// std imports
use std::path::{Path, PathBuf};

// local imports
use crate::{error::Result, settings::Settings};

// ---

pub const APP_NAME: &str = "agrep";

/// Returns the location of the user configuration file, if the platform has a configuration directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
}

/// Loads settings from the given configuration file, which then has to exist,
/// or from the default location, where it may be missing.
pub fn load(file: Option<&Path>) -> Result<Settings> {
    match file {
        Some(file) => Settings::load(Some(file), true),
        None => Settings::load(default_path().as_deref(), false),
    }
}
