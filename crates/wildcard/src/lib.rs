//! Shell-style wildcard patterns, compiled once and matched many times.
//!
//! A pattern is compiled into a short sequence of steps which is then run
//! against candidate strings with a single-point backtracking matcher. The
//! compiled [`Pattern`] is immutable and can be shared between threads, which
//! suits filtering large numbers of file names during a directory walk.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches one or more characters, or zero or more at the end of the pattern
//! - `?` - Matches exactly one UTF-8 character
//! - `\*`, `\?`, `\\` - Escaped literal characters, any other character may be escaped too
//! - Any other character matches itself
//! - A trailing `\` without a following character is treated as a literal backslash
//! - `*` directly followed by `*` or `?` is rejected as ambiguous
//!
//! A pattern always matches the whole string, never a part of it.
//!
//! # Examples
//!
//! ```
//! use wildcard::Pattern;
//!
//! let pattern = Pattern::new("*.txt")?;
//! assert!(pattern.matches("hello.txt"));
//! assert!(!pattern.matches("hello.rs"));
//!
//! let pattern = Pattern::new("test?.log")?;
//! assert!(pattern.matches("test1.log"));
//! assert!(!pattern.matches("test12.log"));
//!
//! // A bare trailing `*` may match nothing at all
//! let pattern = Pattern::new("PLAN9*")?;
//! assert!(pattern.matches("PLAN9"));
//!
//! // Escaped wildcards
//! let pattern = Pattern::new(r"\*")?;
//! assert!(pattern.matches("*"));
//! assert!(!pattern.matches("x"));
//! # Ok::<(), wildcard::Error>(())
//! ```
//!
//! # Backtracking
//!
//! Only the first `*` of a pattern is retried with a different span when a
//! later part of the pattern fails to match. This keeps matching close to
//! linear, at the cost of rejecting some inputs that a general glob engine
//! would accept:
//!
//! ```
//! use wildcard::Pattern;
//!
//! let pattern = Pattern::new("*ab")?;
//! assert!(pattern.matches("xabyab"));
//!
//! let pattern = Pattern::new("*x*ab")?;
//! assert!(!pattern.matches("1x2abab"));
//! # Ok::<(), wildcard::Error>(())
//! ```

mod compiler;
mod cursor;
mod error;
mod pattern;
mod step;
mod utf8;
mod value;

pub use error::{Error, Result};
pub use pattern::Pattern;
pub use step::{Step, StepKind};
pub use value::{Matcher, PatternType, PatternValue, matches};
