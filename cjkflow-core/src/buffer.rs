//! Open paragraph with running summaries
//!
//! The cascade asks the same questions of the open paragraph after every
//! line: is a bracket still open, does it end a sentence, is it one bracketed
//! unit. The buffer keeps the bracket stack, the script mix and the depth of
//! the leading bracket type current as lines are appended, so each line costs
//! time in proportion to its own length.

use crate::boundary::{outer_bracket_pair, sentence_boundary};
use crate::bracket::{BracketBalance, BracketDepth};
use crate::chars::{last_non_whitespace, ScriptTally};
use std::mem;

/// Paragraph text being assembled by the reflow driver.
#[derive(Debug, Clone, Default)]
pub struct ParagraphBuffer {
    text: String,
    brackets: BracketBalance,
    script: ScriptTally,
    /// Depth of the bracket type that opens the paragraph, if it opens with one
    lead: Option<BracketDepth>,
    /// Set once a non-whitespace character has been seen
    lead_seen: bool,
}

impl ParagraphBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append `s` directly; CJK needs no separator between merged lines.
    pub fn push_str(&mut self, s: &str) {
        if !self.lead_seen {
            if let Some(first) = s.chars().find(|ch| !ch.is_whitespace()) {
                self.lead_seen = true;
                self.lead = BracketDepth::new(first);
            }
        }

        self.text.push_str(s);
        self.brackets.push_str(s);
        self.script.add(s);
        if let Some(lead) = &mut self.lead {
            lead.push_str(s);
        }
    }

    /// Take the paragraph text and reset every summary.
    pub fn take(&mut self) -> String {
        let text = mem::take(&mut self.text);
        self.clear();
        text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.brackets.clear();
        self.script = ScriptTally::default();
        self.lead = None;
        self.lead_seen = false;
    }

    #[inline]
    pub fn last_char(&self) -> Option<char> {
        last_non_whitespace(&self.text)
    }

    /// Same answer as [`crate::bracket::has_unclosed_bracket`] on the text.
    #[inline]
    pub fn has_unclosed_bracket(&self) -> bool {
        self.brackets.is_unsafe()
    }

    /// Same answer as [`crate::boundary::ends_with_sentence_boundary`] on the
    /// text.
    pub fn ends_with_sentence_boundary(&self) -> bool {
        sentence_boundary(&self.text, || self.script.is_mostly_cjk())
    }

    /// Same answer as [`crate::boundary::ends_with_cjk_bracket_boundary`] on
    /// the text.
    pub fn ends_with_cjk_bracket_boundary(&self) -> bool {
        let Some((open, _)) = outer_bracket_pair(&self.text) else {
            return false;
        };

        self.script.is_mostly_cjk()
            && self
                .lead
                .is_some_and(|lead| lead.open() == open && lead.is_balanced())
    }
}
