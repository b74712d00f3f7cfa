// std imports
use std::path::PathBuf;
use std::time::Duration;

// third-party imports
use clap::Parser;
use wildcard::PatternType;

// ---

/// Recursively searches files for a byte string until a timeout.
///
/// The search pattern is checked byte for byte, file names are filtered with a wildcard pattern.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Give up after this long, e.g. 500ms, 2s or 1m [default: 2s].
    #[arg(long, env = "AGREP_TIMEOUT", value_parser = humantime::parse_duration, overrides_with = "timeout")]
    pub timeout: Option<Duration>,

    /// Directory to start from.
    #[arg(long, default_value = ".", overrides_with = "path")]
    pub path: PathBuf,

    /// File name pattern, `*` matches one or more characters, or any tail at the end, `?` matches a single character [default: *].
    #[arg(
        long,
        visible_alias = "filepattern",
        env = "AGREP_FILE_PATTERN",
        allow_hyphen_values = true,
        overrides_with = "file_pattern"
    )]
    pub file_pattern: Option<String>,

    /// How to interpret the file name pattern, glob or literal [default: glob].
    #[arg(long, env = "AGREP_PATTERN_TYPE", overrides_with = "pattern_type")]
    pub pattern_type: Option<PatternType>,

    /// Number of file reading threads [default: number of CPUs].
    #[arg(long, short = 'C', env = "AGREP_CONCURRENCY", overrides_with = "concurrency")]
    pub concurrency: Option<usize>,

    /// Configuration file to use instead of the default one.
    #[arg(long, env = "AGREP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Byte string to search for.
    #[arg(name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: String,
}

#[cfg(test)]
impl Opt {
    /// Parses arguments with lookup of environment variables disabled.
    pub(crate) fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        use clap::{CommandFactory, FromArgMatches, builder::Resettable};

        let matches = Self::command()
            .mut_args(|arg| arg.env(Resettable::Reset))
            .try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }
}

#[cfg(test)]
mod tests;
