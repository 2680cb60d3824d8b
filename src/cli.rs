use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable per-file breakdown
    Terminal,
    /// Machine-readable report for the dashboard importer
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "speclens")]
#[command(about = "Command metrics and scaffold extraction for Cypress spec files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify test commands and report per-test metrics
    Analyze {
        /// Project root containing the conventional test tree
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Spec directory, overriding the cypress/e2e convention
        #[arg(long = "tests-dir")]
        tests_dir: Option<PathBuf>,

        /// Glob patterns for files to skip
        #[arg(long = "ignore", value_delimiter = ',')]
        ignore: Option<Vec<String>>,
    },

    /// Strip test bodies in place, leaving suite scaffolding intact
    Strip {
        /// Project root containing the conventional test tree
        path: PathBuf,

        /// Rewrite files on disk; without this only a summary is printed
        #[arg(long)]
        write: bool,

        /// Spec directory, overriding the cypress/e2e convention
        #[arg(long = "tests-dir")]
        tests_dir: Option<PathBuf>,

        /// Glob patterns for files to skip
        #[arg(long = "ignore", value_delimiter = ',')]
        ignore: Option<Vec<String>>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_analyze_defaults() {
        let cli = Cli::try_parse_from(["speclens", "analyze", "."]).unwrap();
        match cli.command {
            Commands::Analyze { format, output, .. } => {
                assert_eq!(format, OutputFormat::Terminal);
                assert!(output.is_none());
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn parses_strip_write_flag() {
        let cli = Cli::try_parse_from(["speclens", "strip", "proj", "--write"]).unwrap();
        match cli.command {
            Commands::Strip { write, path, .. } => {
                assert!(write);
                assert_eq!(path, PathBuf::from("proj"));
            }
            _ => panic!("expected strip"),
        }
    }

    #[test]
    fn rejects_missing_path() {
        assert!(Cli::try_parse_from(["speclens", "analyze"]).is_err());
    }
}
