// third-party imports
use memchr::memmem;

// local imports
use crate::utf8::first_char_width;

// ---

/// Kind of a compiled [`Step`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub enum StepKind {
    /// Plain text with no wildcard in front of it, escaped characters included.
    #[default]
    Literal,
    /// `?`, exactly one character followed by the tail.
    Single,
    /// `*`, a span of characters followed by the tail.
    Many,
    /// End of input.
    End,
}

impl StepKind {
    /// Returns whether the kind consumes a variable part of the input.
    #[inline]
    pub fn is_wildcard(self) -> bool {
        matches!(self, Self::Single | Self::Many)
    }

    /// Scans the front of `input` for this kind of step followed by `tail`.
    ///
    /// Returns the number of bytes consumed, including `tail`, or `None` if the
    /// input does not match, in which case nothing is consumed.
    #[inline]
    pub fn scan(self, input: &str, tail: &str) -> Option<usize> {
        match self {
            Self::Literal => scan_literal(input, tail),
            Self::Single => scan_single(input, tail),
            Self::Many => scan_many(input, tail),
            Self::End => scan_end(input, tail),
        }
    }
}

// ---

/// A single unit of a compiled pattern: a wildcard (or nothing, for literal text)
/// together with the text that must immediately follow what the wildcard consumed.
#[derive(Debug, PartialEq, Eq, Clone, Default, Hash)]
pub struct Step {
    pub(crate) kind: StepKind,
    pub(crate) tail: String,
}

impl Step {
    pub(crate) fn end() -> Self {
        Self {
            kind: StepKind::End,
            tail: String::new(),
        }
    }

    #[inline]
    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// Text required right after the part consumed by the wildcard.
    #[inline]
    pub fn tail(&self) -> &str {
        &self.tail
    }

    #[inline]
    pub(crate) fn scan(&self, input: &str) -> Option<usize> {
        self.kind.scan(input, &self.tail)
    }
}

// ---

#[inline]
fn scan_literal(input: &str, tail: &str) -> Option<usize> {
    input.starts_with(tail).then_some(tail.len())
}

#[inline]
fn scan_single(input: &str, tail: &str) -> Option<usize> {
    let width = first_char_width(input)?;
    input[width..].starts_with(tail).then_some(width + tail.len())
}

// The wildcard takes at least one character unless the tail is empty,
// in which case it takes everything that is left, possibly nothing.
#[inline]
fn scan_many(input: &str, tail: &str) -> Option<usize> {
    if input.is_empty() {
        return tail.is_empty().then_some(0);
    }
    if tail.is_empty() {
        return Some(input.len());
    }

    let width = first_char_width(input)?;
    let found = memmem::find(input[width..].as_bytes(), tail.as_bytes())?;
    Some(width + found + tail.len())
}

#[inline]
fn scan_end(input: &str, tail: &str) -> Option<usize> {
    (input.is_empty() && tail.is_empty()).then_some(0)
}
