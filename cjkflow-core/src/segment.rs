//! Output segments

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// What produced a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SegmentKind {
    /// Reconstructed paragraph, possibly merged from many lines
    Paragraph,
    /// Visual rule such as `------`
    Divider,
    /// `=== [Page n/m] ===`
    PageMarker,
    /// Chapter or title heading (`第一章`, `序章`)
    Title,
    /// Front-matter line (`作者：…`)
    Metadata,
    /// Short heading-like line
    Heading,
}

impl SegmentKind {
    /// Lowercase name used by output formats
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Divider => "divider",
            Self::PageMarker => "page_marker",
            Self::Title => "title",
            Self::Metadata => "metadata",
            Self::Heading => "heading",
        }
    }

    /// Returns true for every kind that stands for a single input line
    pub fn is_structural(&self) -> bool {
        !matches!(self, Self::Paragraph)
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finished unit of output, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Paragraph, text)
    }
}

impl AsRef<str> for Segment {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Join segment texts with `"\n"` when `compact`, otherwise `"\n\n"`.
pub fn join_segments<S: AsRef<str>>(segments: &[S], compact: bool) -> String {
    let separator = if compact { "\n" } else { "\n\n" };
    let mut out = String::with_capacity(
        segments.iter().map(|s| s.as_ref().len() + separator.len()).sum(),
    );

    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(segment.as_ref());
    }

    out
}
