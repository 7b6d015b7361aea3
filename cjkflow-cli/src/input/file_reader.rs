//! File reading with encoding support

use crate::error::CliError;
use anyhow::{Context, Result};
use encoding_rs::{Encoding, UTF_8};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Decodes input bytes as strict UTF-8 or through an explicit encoding
#[derive(Debug, Clone, Copy)]
pub struct FileReader {
    encoding: &'static Encoding,
    explicit: bool,
}

impl Default for FileReader {
    fn default() -> Self {
        Self {
            encoding: UTF_8,
            explicit: false,
        }
    }
}

impl FileReader {
    /// Reader for `label`, or strict UTF-8 when `None`
    pub fn new(label: Option<&str>) -> Result<Self, CliError> {
        match label {
            None => Ok(Self::default()),
            Some(label) => {
                let encoding = Encoding::for_label(label.as_bytes())
                    .ok_or_else(|| CliError::Encoding(format!("unknown encoding '{label}'")))?;
                Ok(Self {
                    encoding,
                    explicit: true,
                })
            }
        }
    }

    /// Name of the encoding in use
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Read a file and decode it
    pub fn read_text(&self, path: &Path) -> Result<String> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()))
                .with_context(|| format!("Failed to read file: {}", path.display()));
        }
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        log::debug!(
            "Decoding {} ({} bytes) as {}",
            path.display(),
            bytes.len(),
            self.encoding_name()
        );
        let text = self
            .decode(&bytes)
            .with_context(|| format!("Failed to decode file: {}", path.display()))?;
        Ok(text)
    }

    /// Read all of stdin and decode it
    pub fn read_stdin(&self) -> Result<String> {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        let text = self.decode(&bytes).context("Failed to decode stdin")?;
        Ok(text)
    }

    /// Decode raw bytes, dropping a leading BOM.
    ///
    /// Without an explicit encoding, malformed UTF-8 is an error. With one,
    /// malformed sequences become U+FFFD and a warning is logged.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, CliError> {
        if !self.explicit {
            let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
            return std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|e| CliError::Encoding(format!("input is not valid UTF-8: {e}")));
        }

        let (text, had_errors) = self.encoding.decode_with_bom_removal(bytes);
        if had_errors {
            log::warn!(
                "Malformed {} input; invalid sequences were replaced",
                self.encoding.name()
            );
        }
        Ok(text.into_owned())
    }
}
