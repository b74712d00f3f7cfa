//
// search module
//
// search pipeline scheme:
// -------------------------------------------------------------
//                 | N                 ->   |
// | dir-walk -> % | N * file-scan     -> % | collect-hits ->
//                 | N                 ->   |
// -------------------------------------------------------------
//

// std imports
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

// third-party imports
use crossbeam_channel::{self as channel, RecvTimeoutError, Sender};
use crossbeam_utils::thread;
use memchr::memmem::Finder;
use walkdir::WalkDir;
use wildcard::{Matcher, PatternValue};

// local imports
use crate::error::{Error, Result};

// ---

const QUEUE_CAPACITY: usize = 100;

// ---

#[derive(Debug, Clone)]
pub struct Options {
    /// Directory to start from.
    pub root: PathBuf,
    /// Byte string that has to be contained in a file.
    pub needle: Vec<u8>,
    /// Pattern for file names, matched against the last path component only.
    pub file_pattern: PatternValue,
    /// Number of file scanning threads, at least one is always used.
    pub concurrency: usize,
    /// Time limit for the whole search.
    pub timeout: Duration,
}

pub struct Search {
    options: Options,
}

impl Search {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Runs the search and returns paths of all hits sorted.
    ///
    /// The file pattern is resolved before the walk starts, so a bad pattern
    /// fails the search without touching the file system. Any walk or read
    /// error stops the search.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let matcher = self.options.file_pattern.resolve()?;
        let finder = Finder::new(&self.options.needle);
        let n = self.options.concurrency.max(1);
        let timeout = self.options.timeout;
        let deadline = Instant::now().checked_add(timeout);
        let cancelled = AtomicBool::new(false);

        log::debug!(
            "search {:?} in files matching {:?} under {} with {} threads",
            String::from_utf8_lossy(&self.options.needle),
            self.options.file_pattern.as_str(),
            self.options.root.display(),
            n,
        );

        let result = thread::scope(|scope| -> Result<Vec<PathBuf>> {
            let (txp, rxp) = channel::bounded::<PathBuf>(QUEUE_CAPACITY);
            let (txh, rxh) = channel::bounded::<Result<PathBuf>>(QUEUE_CAPACITY);

            // spawn walker thread
            {
                let txh = txh.clone();
                let (matcher, cancelled) = (&matcher, &cancelled);
                scope.spawn(move |_| self.walk(matcher, txp, txh, cancelled));
            }
            // spawn scanning threads
            for _ in 0..n {
                let (rxp, txh) = (rxp.clone(), txh.clone());
                let (finder, cancelled) = (&finder, &cancelled);
                scope.spawn(move |_| {
                    for path in rxp.iter() {
                        if cancelled.load(Ordering::Relaxed) {
                            break;
                        }
                        let hit = match fs::read(&path) {
                            Ok(data) if finder.find(&data).is_some() => Ok(path),
                            Ok(_) => continue,
                            Err(source) => Err(Error::ReadFile { path, source }),
                        };
                        if txh.send(hit).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(rxp);
            drop(txh);

            // collect hits until all senders are gone
            let mut hits = Vec::new();
            let result = loop {
                if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                    break Err(Error::Timeout(timeout));
                }
                let received = match deadline {
                    Some(deadline) => rxh.recv_deadline(deadline),
                    None => rxh.recv().map_err(|_| RecvTimeoutError::Disconnected),
                };
                match received {
                    Ok(Ok(path)) => {
                        log::debug!("hit: {}", path.display());
                        hits.push(path);
                    }
                    Ok(Err(err)) => break Err(err),
                    Err(RecvTimeoutError::Disconnected) => break Ok(hits),
                    Err(RecvTimeoutError::Timeout) => break Err(Error::Timeout(timeout)),
                }
            };
            if result.is_err() {
                cancelled.store(true, Ordering::Relaxed);
            }
            result
        })
        .unwrap_or_else(|panic| std::panic::resume_unwind(panic));

        let mut hits = result?;
        hits.sort();
        log::debug!("found {} hits", hits.len());
        Ok(hits)
    }

    fn walk(&self, matcher: &Matcher, paths: Sender<PathBuf>, hits: Sender<Result<PathBuf>>, cancelled: &AtomicBool) {
        let mut n = 0;
        for entry in WalkDir::new(&self.options.root) {
            if cancelled.load(Ordering::Relaxed) {
                return;
            }
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    hits.send(Err(err.into())).ok();
                    return;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if !matcher.matches(&entry.file_name().to_string_lossy()) {
                continue;
            }
            if paths.send(entry.into_path()).is_err() {
                return;
            }
            n += 1;
        }
        log::debug!("walk complete: {n} files matched the file pattern");
    }
}
