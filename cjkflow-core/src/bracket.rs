//! Strict bracket balance checks
//!
//! Brackets in extracted text are usually shallow, so the opener stack lives
//! inline in a [`SmallVec`] and only spills to the heap on deep nesting.

use crate::tables::{is_bracket_closer, is_bracket_opener, is_matching_bracket, matching_closer};
use smallvec::SmallVec;

/// Inline capacity of the opener stack
const STACK_INLINE: usize = 8;

/// Returns true if `s` is bracket-unsafe.
///
/// The check is strict:
/// - a closer with nothing open is unsafe immediately
/// - a closer that does not match the innermost opener is unsafe immediately
/// - at the end, any opener still open is unsafe
///
/// A string without any bracket is safe.
pub fn has_unclosed_bracket(s: &str) -> bool {
    let mut balance = BracketBalance::new();
    balance.push_str(s);
    balance.is_unsafe()
}

/// Returns true if the bracket type opened by `open` never closes more than
/// it opened and ends at depth zero. Other bracket types are ignored.
///
/// An `open` that is not a known opener counts as balanced.
pub fn is_bracket_type_balanced(s: &str, open: char) -> bool {
    match BracketDepth::new(open) {
        Some(mut depth) => {
            depth.push_str(s);
            depth.is_balanced()
        }
        None => true,
    }
}

/// [`has_unclosed_bracket`] over text that arrives in pieces.
///
/// A stray or mismatched closer is sticky: the state stays unsafe until
/// [`clear`](Self::clear).
#[derive(Debug, Clone, Default)]
pub struct BracketBalance {
    stack: SmallVec<[char; STACK_INLINE]>,
    broken: bool,
}

impl BracketBalance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_str(&mut self, s: &str) {
        if self.broken {
            return;
        }

        for ch in s.chars() {
            if is_bracket_opener(ch) {
                self.stack.push(ch);
                continue;
            }

            if is_bracket_closer(ch) {
                match self.stack.pop() {
                    Some(open) if is_matching_bracket(open, ch) => {}
                    _ => {
                        self.broken = true;
                        return;
                    }
                }
            }
        }
    }

    pub fn is_unsafe(&self) -> bool {
        self.broken || !self.stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
        self.broken = false;
    }
}

/// Running depth of one bracket type, the incremental form of
/// [`is_bracket_type_balanced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketDepth {
    open: char,
    close: char,
    depth: u64,
    underflow: bool,
}

impl BracketDepth {
    /// Tracker for the type opened by `open`, or `None` if `open` is not an
    /// opener
    pub fn new(open: char) -> Option<Self> {
        matching_closer(open).map(|close| Self {
            open,
            close,
            depth: 0,
            underflow: false,
        })
    }

    pub fn open(&self) -> char {
        self.open
    }

    pub fn push_str(&mut self, s: &str) {
        if self.underflow {
            return;
        }

        for ch in s.chars() {
            if ch == self.open {
                self.depth += 1;
            } else if ch == self.close {
                match self.depth.checked_sub(1) {
                    Some(depth) => self.depth = depth,
                    None => {
                        self.underflow = true;
                        return;
                    }
                }
            }
        }
    }

    pub fn is_balanced(&self) -> bool {
        !self.underflow && self.depth == 0
    }
}
