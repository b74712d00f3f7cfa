// third-party imports
use thiserror::Error;

/// Error is an error which may occur when compiling or resolving a pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("* or ? may not follow * (at byte {position})")]
    InvalidGlobSequence { position: usize },
    #[error("unable to compile glob pattern")]
    PatternCompilationFailed,
    #[error("invalid pattern type {0:?}, use any of {names:?}", names = crate::PatternType::NAMES)]
    InvalidPatternType(String),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
