//! Output formatting module

use anyhow::Result;
use cjkflow_core::Segment;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Mark the start of a new input document
    fn start_document(&mut self, _source: &str) -> Result<()> {
        Ok(())
    }

    /// Format and output a single segment
    fn format_segment(&mut self, segment: &Segment, index: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Reflowed plain text
    Text,
    /// JSON array of segments with their kind
    Json,
    /// Markdown with headings, rules and quoted metadata
    Markdown,
}

impl OutputFormat {
    /// Name used on the command line and in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Markdown => "markdown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Text => "Reflowed plain text",
            Self::Json => "JSON array of segments with kind and index",
            Self::Markdown => "Markdown document with structural markup",
        }
    }

    /// File extension for per-file output
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }

    /// Parse a format name, ignoring case
    pub fn parse(name: &str) -> Option<Self> {
        <Self as clap::ValueEnum>::from_str(name, true).ok()
    }

    /// Build the formatter for this format over `writer`
    pub fn formatter<'w, W>(
        &self,
        writer: W,
        compact: bool,
        pretty_json: bool,
    ) -> Box<dyn OutputFormatter + 'w>
    where
        W: std::io::Write + Send + Sync + 'w,
    {
        match self {
            Self::Text => Box::new(TextFormatter::new(writer, compact)),
            Self::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            Self::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}
