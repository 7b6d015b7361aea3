//! Generate config command implementation

use crate::config::CONFIG_TEMPLATE;
use crate::error::CliResult;
use anyhow::Context;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Use it for processing:");
        println!(
            "   cjkflow process -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_writes_valid_template() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cjkflow.toml");

        GenerateConfigArgs {
            output: path.clone(),
            force: false,
        }
        .execute()
        .unwrap();

        assert!(CliConfig::load(&path).is_ok());
    }

    #[test]
    fn test_refuses_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cjkflow.toml");
        fs::write(&path, "# mine").unwrap();

        let args = GenerateConfigArgs {
            output: path.clone(),
            force: false,
        };
        assert!(args.execute().is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        GenerateConfigArgs {
            output: path.clone(),
            force: true,
        }
        .execute()
        .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }
}
