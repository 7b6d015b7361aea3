//! Reflow options

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options fixed for one reflow invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReflowOptions {
    /// The input carries `=== [Page n/m] ===` markers; blank lines are then
    /// trusted as paragraph breaks.
    pub add_pdf_page_header: bool,
    /// Join segments with a single newline instead of a blank line.
    pub compact: bool,
}

impl ReflowOptions {
    /// Default options: no page headers, blank line between segments
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the input carries page markers
    pub fn with_page_header(mut self, add_pdf_page_header: bool) -> Self {
        self.add_pdf_page_header = add_pdf_page_header;
        self
    }

    /// Set compact output
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}
