//! Configuration module
//!
//! A TOML file with one table per concern. Every table and every field is
//! optional; missing values take the defaults below.

use crate::error::CliError;
use crate::output::OutputFormat;
use cjkflow_core::ReflowOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Commented template written by `generate-config`
pub const CONFIG_TEMPLATE: &str = r#"# cjkflow configuration

[reflow]
# Join segments with a single newline instead of a blank line
compact = false
# Input carries "=== [Page n/m] ===" markers; blank lines are trusted as
# paragraph breaks
add_pdf_page_header = false

[cleanup]
# Remove zero-width spaces, BOMs and LTR/RTL marks before reflowing
strip_invisible = true
# Drop lines repeating the previous line (running headers)
collapse_duplicate_lines = false

[output]
# text | json | markdown
default_format = "text"
pretty_json = true
# Appended to the file stem when writing into an output directory
suffix = "_reflow"

[input]
# Any WHATWG encoding label (gbk, big5, shift_jis, ...); UTF-8 if unset
# encoding = "gbk"

[performance]
# Worker threads for parallel batches (0 = one per CPU)
worker_threads = 0
"#;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Reflow engine options
    #[serde(default)]
    pub reflow: ReflowOptions,

    /// Cleanup passes applied before reflow
    #[serde(default)]
    pub cleanup: CleanupConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Input decoding
    #[serde(default)]
    pub input: InputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Cleanup-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct CleanupConfig {
    /// Strip invisible characters
    pub strip_invisible: bool,

    /// Collapse consecutive duplicate lines
    pub collapse_duplicate_lines: bool,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            strip_invisible: true,
            collapse_duplicate_lines: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// File-name suffix for directory output
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            suffix: "_reflow".to_string(),
        }
    }
}

/// Input-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Encoding label; strict UTF-8 when unset
    pub encoding: Option<String>,
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config = Self::parse(&content)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str) -> Result<Self, CliError> {
        let config: Self = toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject unknown formats and encoding labels
    pub fn validate(&self) -> Result<(), CliError> {
        self.output_format()?;
        if let Some(label) = &self.input.encoding {
            if encoding_rs::Encoding::for_label(label.as_bytes()).is_none() {
                return Err(CliError::Config(format!("unknown encoding '{label}'")));
            }
        }
        Ok(())
    }

    /// Configured default output format
    pub fn output_format(&self) -> Result<OutputFormat, CliError> {
        OutputFormat::parse(&self.output.default_format).ok_or_else(|| {
            CliError::Config(format!(
                "unknown output format '{}'",
                self.output.default_format
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::parse("").unwrap();
        assert_eq!(config.reflow, ReflowOptions::default());
        assert!(config.cleanup.strip_invisible);
        assert!(!config.cleanup.collapse_duplicate_lines);
        assert_eq!(config.output.suffix, "_reflow");
        assert!(config.input.encoding.is_none());
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn test_template_parses() {
        let config = CliConfig::parse(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_tables() {
        let config = CliConfig::parse(
            r#"
[reflow]
compact = true

[output]
default_format = "json"

[input]
encoding = "gbk"
"#,
        )
        .unwrap();

        assert!(config.reflow.compact);
        assert!(!config.reflow.add_pdf_page_header);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);
        assert!(config.output.pretty_json);
        assert_eq!(config.input.encoding.as_deref(), Some("gbk"));
    }

    #[test]
    fn test_rejects_unknown_format() {
        let err = CliConfig::parse("[output]\ndefault_format = \"pdf\"\n").unwrap_err();
        assert!(err.to_string().contains("unknown output format 'pdf'"));
    }

    #[test]
    fn test_rejects_unknown_encoding() {
        let err = CliConfig::parse("[input]\nencoding = \"klingon\"\n").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(CliConfig::parse("[reflow\ncompact = ").is_err());
    }
}
