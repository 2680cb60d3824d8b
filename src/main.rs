use anyhow::Result;
use clap::Parser;
use speclens::cli::{Cli, Commands};
use speclens::commands::analyze::{handle_analyze, AnalyzeConfig};
use speclens::commands::strip::{handle_strip, StripConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            tests_dir,
            ignore,
        } => {
            let config = AnalyzeConfig {
                path,
                tests_dir,
                ignore: ignore.unwrap_or_default(),
                format,
                output,
            };
            handle_analyze(config)?;
        }
        Commands::Strip {
            path,
            write,
            tests_dir,
            ignore,
        } => {
            let config = StripConfig {
                path,
                tests_dir,
                ignore: ignore.unwrap_or_default(),
                write,
            };
            handle_strip(config)?;
        }
    }

    Ok(())
}
