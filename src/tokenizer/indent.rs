//! # Indentation Tracking
//!
//! Turns changes in leading-whitespace width into `BlockOpen`/`BlockClose`
//! tokens, the structural equivalent of braces in brace-delimited languages.
//!
//! The tracker records the indent level of every line it has seen on a stack.
//! A line deeper than the top opens blocks, a line shallower closes them, and
//! a dedent must land exactly on a recorded level: the tracker only knows the
//! levels that actually occurred, so a jump from level 0 to level 3 followed
//! by a dedent to level 1 is an error, not a guess.

use super::token::{Token, TokenizerErrorKind};

/// Number of leading spaces per indentation level.
pub const INDENT_WIDTH: usize = 2;

/// Per-run indentation state.
///
/// Create one per tokenization run; [`IndentTracker::finish`] consumes the
/// tracker, so a finished run cannot leak state into the next one.
#[derive(Debug, Default)]
pub struct IndentTracker {
    /// Indent levels of the enclosing blocks, innermost last.
    /// The base level 0 is implicit and never stored.
    levels: Vec<usize>,
}

impl IndentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn depth(&self) -> usize {
        self.levels.last().copied().unwrap_or(0)
    }

    /// Folds the leading-whitespace width of a logical line into the tracker.
    ///
    /// Returns the structural tokens the width change produces: one
    /// `BlockOpen` per level gained, or one `BlockClose` per level dropped,
    /// never both. A dedent that lands between two recorded levels fails
    /// with the indentation error kind.
    pub fn observe(&mut self, width: usize) -> Result<Vec<Token>, TokenizerErrorKind> {
        let level = width / INDENT_WIDTH;
        let top = self.depth();
        match level.cmp(&top) {
            std::cmp::Ordering::Greater => {
                self.levels.push(level);
                Ok(vec![Token::BlockOpen; level - top])
            }
            std::cmp::Ordering::Less => {
                while self.depth() > level {
                    self.levels.pop();
                }
                if self.depth() != level {
                    return Err(TokenizerErrorKind::Indentation(format!(
                        "dedent to level {level} matches no enclosing block"
                    )));
                }
                Ok(vec![Token::BlockClose; top - level])
            }
            std::cmp::Ordering::Equal => Ok(Vec::new()),
        }
    }

    /// Closes every block still open at end of input.
    pub fn finish(self) -> Vec<Token> {
        vec![Token::BlockClose; self.depth()]
    }
}
