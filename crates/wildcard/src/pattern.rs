// std imports
use std::fmt;
use std::str::FromStr;

// local imports
use crate::compiler::Compiler;
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::step::Step;

/// A compiled wildcard pattern.
///
/// Patterns are created from strings containing wildcard characters:
/// - `*` matches one or more characters, or zero or more characters at the end of the pattern
/// - `?` matches exactly one UTF-8 character
/// - `\` escapes the next character (or is literal if at end of pattern)
///
/// A pattern is compiled once and can then be matched against any number of
/// strings, from any number of threads at the same time.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("*.txt")?;
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
///
/// let pattern = Pattern::new("test?.log")?;
/// assert!(pattern.matches("test1.log"));
/// assert!(!pattern.matches("test.log"));
/// # Ok::<(), wildcard::Error>(())
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Pattern {
    source: String,
    steps: Vec<Step>,
}

impl Pattern {
    /// Compiles a new pattern from a string.
    ///
    /// Fails with [`Error::InvalidGlobSequence`] if `*` or `?` directly follows `*`.
    /// The empty pattern is valid and matches only the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::{Error, Pattern};
    ///
    /// // Escaped wildcards
    /// let pattern = Pattern::new(r"file\*.txt")?;
    /// assert!(pattern.matches("file*.txt"));
    /// assert!(!pattern.matches("file123.txt"));
    ///
    /// // Ambiguous wildcard sequences are rejected
    /// assert_eq!(Pattern::new("a**b"), Err(Error::InvalidGlobSequence { position: 2 }));
    /// # Ok::<(), wildcard::Error>(())
    /// ```
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let source = raw.into();
        let steps = Compiler::new().compile(&source)?;
        Ok(Self { source, steps })
    }

    /// Returns the exact text the pattern was compiled from.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the compiled steps, the last of which is always an `End` step.
    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Tests whether the pattern matches the whole of the given text.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("PLAN9*")?;
    /// assert!(pattern.matches("PLAN9"));
    /// assert!(pattern.matches("PLAN9_foo"));
    /// assert!(!pattern.matches("PLAN8_foo"));
    ///
    /// // UTF-8 character matching
    /// let pattern = Pattern::new("??")?;
    /// assert!(pattern.matches("🦀🎉"));
    /// assert!(!pattern.matches("a"));
    /// # Ok::<(), wildcard::Error>(())
    /// ```
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        Cursor::new(&self.steps, text).run()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Pattern {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}
