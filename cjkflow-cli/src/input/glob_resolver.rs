//! Input pattern resolution
//!
//! Each input is a glob pattern, a file, or a directory. A directory stands
//! for the `.txt` files directly inside it, which is how page-by-page
//! extraction dumps are usually laid out.

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Extension picked up when an input names a directory
const DIRECTORY_EXTENSION: &str = "txt";

/// Resolve inputs to a sorted, duplicate-free list of files
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();

    for pattern in patterns {
        let entries =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

        for entry in entries {
            match entry {
                Ok(path) if path.is_dir() => files.extend(directory_files(&path)?),
                Ok(path) if path.is_file() => {
                    files.insert(path);
                }
                Ok(_) => {}
                Err(e) => log::warn!("Skipping unreadable match for {pattern}: {e}"),
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    log::debug!("Resolved {} input file(s)", files.len());
    Ok(files.into_iter().collect())
}

fn directory_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join(format!("*.{DIRECTORY_EXTENSION}"));
    let pattern = pattern.to_string_lossy();
    let entries = glob(&pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

    Ok(entries
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect())
}
