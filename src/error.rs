// std imports
use std::io;
use std::path::PathBuf;
use std::time::Duration;

// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] wildcard::Error),
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("failed to read file {path:?}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("search timed out after {0:?}")]
    Timeout(Duration),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
