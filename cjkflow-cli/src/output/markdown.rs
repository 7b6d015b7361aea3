//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use cjkflow_core::{Segment, SegmentKind};
use std::io::Write;

/// Markdown formatter - structural segments get markup, paragraphs are
/// written verbatim, blocks are separated by a blank line
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    block_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            block_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_segment(&mut self, segment: &Segment, _index: usize) -> Result<()> {
        if self.block_count > 0 {
            writeln!(self.writer)?;
        }
        self.block_count += 1;

        let text = segment.text.trim();
        match segment.kind {
            SegmentKind::Paragraph => writeln!(self.writer, "{text}")?,
            SegmentKind::Title => writeln!(self.writer, "## {text}")?,
            SegmentKind::Heading => writeln!(self.writer, "### {text}")?,
            SegmentKind::Divider => writeln!(self.writer, "---")?,
            SegmentKind::PageMarker => writeln!(self.writer, "<!-- {text} -->")?,
            SegmentKind::Metadata => writeln!(self.writer, "> {text}")?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
