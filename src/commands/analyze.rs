//! Batch driver for the classification pipeline

use crate::analyzers::{self, commands::extract_commands};
use crate::cli::OutputFormat;
use crate::commands::resolve_test_root;
use crate::core::{Result, RunReport, SkippedFile};
use crate::io::output::{JsonWriter, OutputWriter, TerminalWriter};
use crate::io::walker::SpecWalker;
use crate::{io, metrics};
use log::{debug, warn};
use std::fs::File;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub tests_dir: Option<PathBuf>,
    pub ignore: Vec<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let report = run_analysis(&config)?;
    write_report(&report, config.format, config.output.as_deref())?;
    Ok(())
}

/// Walk, parse, classify, and aggregate every candidate file. One bad file
/// is recorded and skipped; the batch always completes.
pub fn run_analysis(config: &AnalyzeConfig) -> Result<RunReport> {
    let test_root = resolve_test_root(&config.path, config.tests_dir.as_deref())?;
    let files = SpecWalker::new(test_root.clone())
        .with_ignore_patterns(config.ignore.clone())
        .walk()?;

    let mut report = RunReport::new(test_root);
    for path in files {
        debug!("analyzing {}", path.display());
        match analyze_file(&path) {
            Ok(file_metrics) => report.files.push(file_metrics),
            Err(err) => {
                warn!("skipping {}: {err}", path.display());
                report.skipped.push(SkippedFile {
                    path,
                    error: err.to_string(),
                });
            }
        }
    }
    report.finalize();
    Ok(report)
}

fn analyze_file(path: &std::path::Path) -> Result<crate::core::FileMetrics> {
    let content = io::read_file(path)?;
    let ast = analyzers::parse(&content, path.to_path_buf())?;
    let commands = extract_commands(&ast);
    Ok(metrics::aggregate(
        path.to_path_buf(),
        ast.dialect,
        &commands,
    ))
}

fn write_report(
    report: &RunReport,
    format: OutputFormat,
    output: Option<&std::path::Path>,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)?;
            dispatch_writer(report, format, file)
        }
        None => dispatch_writer(report, format, std::io::stdout().lock()),
    }
}

fn dispatch_writer<W: std::io::Write>(
    report: &RunReport,
    format: OutputFormat,
    writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Json => JsonWriter::new(writer).write_report(report)?,
        OutputFormat::Terminal => TerminalWriter::new(writer).write_report(report)?,
    }
    Ok(())
}
