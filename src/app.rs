// std imports
use std::io::Write;

// third-party imports
use wildcard::PatternValue;

// local imports
use crate::{
    cli::Opt,
    error::*,
    search::{Options, Search},
    settings::Settings,
};

// ---

pub struct App {
    search: Search,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self {
            search: Search::new(options),
        }
    }

    /// Runs the search and writes each hit on its own line followed by the number of hits.
    pub fn run(&self, output: &mut dyn Write) -> Result<usize> {
        let hits = self.search.run()?;
        for hit in &hits {
            writeln!(output, "{}", hit.display())?;
        }
        writeln!(output, "{} hits", hits.len())?;
        output.flush()?;
        Ok(hits.len())
    }
}

/// Combines command line options with settings, command line options take precedence.
///
/// The file pattern is compiled here once, so an invalid pattern is reported
/// before the search starts.
pub fn options(opt: Opt, settings: Settings) -> Result<Options> {
    let concurrency = match opt.concurrency.or(settings.concurrency) {
        None | Some(0) => num_cpus::get(),
        Some(value) => value,
    };
    let pattern_type = opt.pattern_type.unwrap_or(settings.pattern_type);
    let file_pattern = opt.file_pattern.unwrap_or(settings.file_pattern);
    let file_pattern = PatternValue::new(pattern_type, file_pattern).compile()?;

    Ok(Options {
        root: opt.path,
        needle: opt.pattern.into_bytes(),
        file_pattern,
        concurrency,
        timeout: opt.timeout.unwrap_or(settings.timeout),
    })
}
