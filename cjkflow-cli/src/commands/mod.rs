//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reflow text files into paragraphs
    Process(process::ProcessArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_parse_process_command() {
        let cli = TestCli::try_parse_from([
            "cjkflow",
            "process",
            "-i",
            "book.txt",
            "--compact",
            "--encoding",
            "gbk",
        ])
        .unwrap();

        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.input, vec!["book.txt".to_string()]);
                assert!(args.compact);
                assert_eq!(args.encoding.as_deref(), Some("gbk"));
            }
            other => panic!("expected process, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_formats() {
        let cli = TestCli::try_parse_from(["cjkflow", "list", "formats"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                subcommand: ListCommands::Formats
            }
        ));
    }

    #[test]
    fn test_output_and_out_dir_conflict() {
        let result = TestCli::try_parse_from([
            "cjkflow", "process", "-i", "a.txt", "-o", "out.txt", "--out-dir", "dir",
        ]);
        assert!(result.is_err());
    }
}
