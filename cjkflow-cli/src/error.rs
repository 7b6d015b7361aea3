//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific failures
#[derive(Error, Debug)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// Configuration file could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown encoding label or undecodable input
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Output could not be written
    #[error("Output error: {0}")]
    Output(String),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
