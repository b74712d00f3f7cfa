// std imports
use std::include_str;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

// third-party imports
use config::{Config, File, FileFormat};
use serde::{Deserialize, Deserializer};
use wildcard::PatternType;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.toml");

// ---

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
    pub concurrency: Option<usize>,
    pub file_pattern: String,
    #[serde(deserialize_with = "deserialize_from_str")]
    pub pattern_type: PatternType,
}

impl Settings {
    /// Loads embedded defaults overlaid with the given file.
    ///
    /// A missing file is an error only if `required` is set.
    pub fn load(file: Option<&Path>, required: bool) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));
        if let Some(file) = file {
            log::debug!("load settings from {}", file.display());
            builder = builder.add_source(File::new(&file.to_string_lossy(), FileFormat::Toml).required(required));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Loads settings from a string in TOML format overlaid on the embedded defaults.
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml))
            .add_source(File::from_str(s, FileFormat::Toml))
            .build()?
            .try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(2),
            concurrency: None,
            file_pattern: "*".into(),
            pattern_type: PatternType::Glob,
        }
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(&s).map_err(serde::de::Error::custom)
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}
