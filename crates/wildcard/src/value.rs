// std imports
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

// local imports
use crate::error::{Error, Result};
use crate::pattern::Pattern;

// ---

/// How pattern text given as a plain string is to be interpreted.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub enum PatternType {
    /// Text with `*`, `?` and `\` wildcard syntax.
    #[default]
    Glob,
    /// Text compared for equality as is.
    Literal,
}

impl PatternType {
    pub const NAMES: [&'static str; 2] = ["glob", "literal"];

    pub fn name(self) -> &'static str {
        match self {
            Self::Glob => Self::NAMES[0],
            Self::Literal => Self::NAMES[1],
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "glob" => Ok(Self::Glob),
            "literal" => Ok(Self::Literal),
            _ => Err(Error::InvalidPatternType(s.to_owned())),
        }
    }
}

// ---

/// Any value accepted as a pattern by [`matches`].
///
/// # Examples
///
/// ```
/// use wildcard::{Pattern, PatternValue};
///
/// assert_eq!(PatternValue::raw("*.rs").matches("lib.rs"), Ok(true));
/// assert_eq!(PatternValue::literal("*.rs").matches("lib.rs"), Ok(false));
/// assert_eq!(PatternValue::literal("*.rs").matches("*.rs"), Ok(true));
///
/// let compiled = PatternValue::from(Pattern::new("lib.*")?);
/// assert_eq!(compiled.matches("lib.rs"), Ok(true));
/// # Ok::<(), wildcard::Error>(())
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum PatternValue {
    /// Compared for equality, wildcard characters have no special meaning.
    Literal(String),
    /// Compiled on demand each time it is resolved.
    Raw(String),
    /// Compiled ahead of time.
    Compiled(Pattern),
}

impl PatternValue {
    /// Creates a value interpreting `text` according to `kind`.
    pub fn new(kind: PatternType, text: impl Into<String>) -> Self {
        match kind {
            PatternType::Glob => Self::Raw(text.into()),
            PatternType::Literal => Self::Literal(text.into()),
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// Returns the pattern text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(text) | Self::Raw(text) => text,
            Self::Compiled(pattern) => pattern.as_str(),
        }
    }

    /// Resolves the value to something that can be matched, compiling it if needed.
    pub fn resolve(&self) -> Result<Matcher<'_>> {
        match self {
            Self::Literal(text) => Ok(Matcher::Literal(text)),
            Self::Raw(text) => Ok(Matcher::Pattern(Cow::Owned(Pattern::new(text.as_str())?))),
            Self::Compiled(pattern) => Ok(Matcher::Pattern(Cow::Borrowed(pattern))),
        }
    }

    /// Resolves the value into an owned form that needs no further compilation.
    pub fn compile(self) -> Result<Self> {
        match self {
            Self::Raw(text) => Ok(Self::Compiled(Pattern::new(text)?)),
            other => Ok(other),
        }
    }

    /// Resolves the value and tests whether it matches `text`.
    #[inline]
    pub fn matches(&self, text: &str) -> Result<bool> {
        Ok(self.resolve()?.matches(text))
    }
}

impl From<Pattern> for PatternValue {
    fn from(pattern: Pattern) -> Self {
        Self::Compiled(pattern)
    }
}

impl fmt::Display for PatternValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---

/// A resolved pattern, ready for matching.
#[derive(Debug, Clone)]
pub enum Matcher<'a> {
    Literal(&'a str),
    Pattern(Cow<'a, Pattern>),
}

impl Matcher<'_> {
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Literal(literal) => *literal == text,
            Self::Pattern(pattern) => pattern.matches(text),
        }
    }
}

// ---

/// Tests whether `pattern` matches `text`.
///
/// Raw patterns are compiled on every call, so prefer [`Pattern`] or
/// [`PatternValue::compile`] when matching many strings.
///
/// # Examples
///
/// ```
/// use wildcard::{Error, PatternValue, matches};
///
/// assert_eq!(matches(&PatternValue::raw("foo/bar/*/baz"), "foo/bar/qux/baz"), Ok(true));
/// assert_eq!(matches(&PatternValue::raw("foo/bar/*/baz?"), "foo/bar/qux/baz"), Ok(false));
/// assert!(matches!(
///     matches(&PatternValue::raw("a**"), "a"),
///     Err(Error::InvalidGlobSequence { .. })
/// ));
/// ```
pub fn matches(pattern: &PatternValue, text: &str) -> Result<bool> {
    pattern.matches(text)
}
