//! cjkflow command-line entry point

use cjkflow_cli::commands::{Commands, ListCommands};
use cjkflow_cli::output::OutputFormat;
use clap::{Parser, ValueEnum};

/// Reflow hard-wrapped CJK text from PDF and OCR extraction into paragraphs
#[derive(Debug, Parser)]
#[command(name = "cjkflow", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Process(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => {
            match subcommand {
                ListCommands::Formats => {
                    println!("Available output formats:");
                    for format in OutputFormat::value_variants() {
                        println!("  {:<10} {}", format.name(), format.description());
                    }
                }
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
