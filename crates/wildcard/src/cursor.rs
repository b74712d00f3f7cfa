// local imports
use crate::step::{Step, StepKind};
use crate::utf8::first_char_width;

// ---

/// Drives a compiled step sequence over a single input.
///
/// Only the first `Many` step of the sequence is remembered for backtracking.
/// Whenever a later step fails, the cursor rewinds to that step and makes its
/// wildcard skip one more character than the last time.
pub(crate) struct Cursor<'a> {
    steps: &'a [Step],
    text: &'a str,
    step: usize,
    offset: usize,
    checkpoint: Option<Checkpoint>,
    rewound: bool,
}

/// Step index of the first `Many` step and the input offset to resume it from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Checkpoint {
    step: usize,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(steps: &'a [Step], text: &'a str) -> Self {
        Self {
            steps,
            text,
            step: 0,
            offset: 0,
            checkpoint: None,
            rewound: false,
        }
    }

    pub fn run(mut self) -> bool {
        while let Some(step) = self.steps.get(self.step) {
            if step.kind == StepKind::Many && self.checkpoint.is_none_or(|cp| cp.step == self.step) {
                self.checkpoint = Some(Checkpoint {
                    step: self.step,
                    offset: self.offset,
                });
            }

            match step.scan(&self.text[self.offset..]) {
                Some(consumed) => {
                    if let Some(cp) = self.checkpoint.as_mut().filter(|cp| cp.step == self.step) {
                        cp.offset += consumed - step.tail.len();
                    }
                    self.offset += consumed;
                    self.step += 1;
                    self.rewound = false;
                }
                None => {
                    if !self.rewind() {
                        return false;
                    }
                }
            }
        }

        self.offset == self.text.len()
    }

    fn rewind(&mut self) -> bool {
        let Some(cp) = self.checkpoint.as_mut() else {
            return false;
        };
        if self.step == 0 || self.rewound {
            return false;
        }
        let Some(width) = first_char_width(&self.text[cp.offset..]) else {
            return false;
        };

        cp.offset += width;
        self.step = cp.step;
        self.offset = cp.offset;
        self.rewound = true;
        true
    }
}
