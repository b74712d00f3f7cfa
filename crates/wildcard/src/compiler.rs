// std imports
use std::mem::take;

// local imports
use crate::error::{Error, Result};
use crate::step::{Step, StepKind};

// ---

/// Turns pattern text into a sequence of steps terminated by an `End` step.
#[derive(Default)]
pub(crate) struct Compiler {
    steps: Vec<Step>,
    next: Step,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compile(mut self, raw: &str) -> Result<Vec<Step>> {
        let mut chars = raw.char_indices();
        while let Some((position, ch)) = chars.next() {
            match ch {
                '*' | '?' => {
                    if self.next.kind == StepKind::Many && self.next.tail.is_empty() {
                        return Err(Error::InvalidGlobSequence { position });
                    }
                    self.flush();
                    self.next.kind = if ch == '*' { StepKind::Many } else { StepKind::Single };
                }
                '\\' => {
                    if let Some((_, escaped)) = chars.next() {
                        self.next.tail.push(escaped);
                    } else {
                        self.next.tail.push('\\');
                    }
                }
                _ => {
                    self.next.tail.push(ch);
                }
            }
        }

        self.flush();
        self.steps.push(Step::end());

        match self.steps.last() {
            Some(step) if step.kind == StepKind::End => Ok(self.steps),
            _ => Err(Error::PatternCompilationFailed),
        }
    }

    // A literal step is only emitted when it has text, wildcard steps always are.
    fn flush(&mut self) {
        if self.next.kind.is_wildcard() || !self.next.tail.is_empty() {
            self.steps.push(take(&mut self.next));
        }
    }
}

#[cfg(test)]
mod tests;
