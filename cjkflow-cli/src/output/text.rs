//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use cjkflow_core::Segment;
use std::io::Write;

/// Plain text formatter - segments separated by a blank line, or by a
/// single newline in compact mode
///
/// A document without segments (whitespace-only input) writes nothing.
pub struct TextFormatter<W: Write> {
    writer: W,
    separator: &'static str,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, compact: bool) -> Self {
        Self {
            writer,
            separator: if compact { "\n" } else { "\n\n" },
            written: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_segment(&mut self, segment: &Segment, _index: usize) -> Result<()> {
        if self.written > 0 {
            self.writer.write_all(self.separator.as_bytes())?;
        }
        self.writer.write_all(segment.text.as_bytes())?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cjkflow_core::{Reflower, SegmentKind};

    fn render(segments: &[Segment], compact: bool) -> String {
        let mut buf = Vec::new();
        let mut formatter = TextFormatter::new(&mut buf, compact);
        for (i, segment) in segments.iter().enumerate() {
            formatter.format_segment(segment, i).unwrap();
        }
        formatter.finish().unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_matches_reflow_output() {
        let text = "第一章 风雪惊变\n钱塘江浩浩江水，\n东流入海。";
        let reflower = Reflower::default();
        let rendered = render(&reflower.segments(text), false);
        assert_eq!(rendered, format!("{}\n", reflower.reflow(text)));
    }

    #[test]
    fn test_compact_separator() {
        let segments = vec![
            Segment::new(SegmentKind::Heading, "甲"),
            Segment::paragraph("乙。"),
        ];
        assert_eq!(render(&segments, true), "甲\n乙。\n");
        assert_eq!(render(&segments, false), "甲\n\n乙。\n");
    }

    #[test]
    fn test_empty_output() {
        assert_eq!(render(&[], false), "");
    }
}
