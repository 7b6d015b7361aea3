//! Unclosed dialogue quote tracking across merged lines

use crate::tables::DialogueQuote;

/// Per-family counters of unclosed dialogue openers.
///
/// Families never cancel each other: a `」` only closes a pending `「`,
/// never a pending `“`. A closer whose family count is already zero is
/// ignored, so counts never go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogueState {
    counts: [u32; DialogueQuote::COUNT],
}

impl DialogueState {
    /// Create a state with every counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all counters
    pub fn reset(&mut self) {
        self.counts = [0; DialogueQuote::COUNT];
    }

    /// Scan `s`, counting openers up and matching closers down
    pub fn update(&mut self, s: &str) {
        for ch in s.chars() {
            if let Some(quote) = DialogueQuote::from_opener(ch) {
                let slot = &mut self.counts[quote.index()];
                *slot = slot.saturating_add(1);
            } else if let Some(quote) = DialogueQuote::from_closer(ch) {
                let slot = &mut self.counts[quote.index()];
                *slot = slot.saturating_sub(1);
            }
        }
    }

    /// Returns true if any family has an unclosed opener
    #[inline]
    pub fn is_unclosed(&self) -> bool {
        self.counts.iter().any(|&c| c > 0)
    }

    /// Current unclosed count for one family
    #[inline]
    pub fn count(&self, quote: DialogueQuote) -> u32 {
        self.counts[quote.index()]
    }
}
