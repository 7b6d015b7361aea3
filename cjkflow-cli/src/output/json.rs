//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use cjkflow_core::{Segment, SegmentKind};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs segments as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    source: Option<String>,
    segments: Vec<SegmentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentData {
    /// Input document the segment came from, for multi-file runs
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<String>,
    /// Position of the segment within its document
    pub index: usize,
    /// Which rule produced the segment
    pub kind: SegmentKind,
    /// The segment text
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            source: None,
            segments: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn start_document(&mut self, source: &str) -> Result<()> {
        self.source = Some(source.to_string());
        Ok(())
    }

    fn format_segment(&mut self, segment: &Segment, index: usize) -> Result<()> {
        self.segments.push(SegmentData {
            source: self.source.clone(),
            index,
            kind: segment.kind,
            text: segment.text.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.segments)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.segments)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
