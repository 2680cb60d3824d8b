//! Batch driver for the body-stripping pipeline

use crate::analyzers;
use crate::commands::resolve_test_root;
use crate::core::{Result, SkippedFile, StripReport, StrippedFile};
use crate::io::walker::SpecWalker;
use crate::{io, transform};
use colored::*;
use log::{debug, warn};
use std::path::{Path, PathBuf};

pub struct StripConfig {
    pub path: PathBuf,
    pub tests_dir: Option<PathBuf>,
    pub ignore: Vec<String>,
    pub write: bool,
}

pub fn handle_strip(config: StripConfig) -> Result<()> {
    let report = run_strip(&config)?;
    print_summary(&report, config.write);
    Ok(())
}

/// Walk, parse, and strip every candidate file. All per-file work happens
/// in memory; the atomic write is the last action for each file, and a
/// failure there is recorded without touching the rest of the batch.
pub fn run_strip(config: &StripConfig) -> Result<StripReport> {
    let test_root = resolve_test_root(&config.path, config.tests_dir.as_deref())?;
    let files = SpecWalker::new(test_root.clone())
        .with_ignore_patterns(config.ignore.clone())
        .walk()?;

    let mut report = StripReport::new(test_root);
    for path in files {
        debug!("stripping {}", path.display());
        match strip_file(&path, config.write) {
            Ok(stripped) => {
                report.total_changed += stripped.changed_tests;
                report.files.push(stripped);
            }
            Err(err) => {
                warn!("skipping {}: {err}", path.display());
                report.skipped.push(SkippedFile {
                    path,
                    error: err.to_string(),
                });
            }
        }
    }
    Ok(report)
}

fn strip_file(path: &Path, write: bool) -> Result<StrippedFile> {
    let content = io::read_file(path)?;
    let ast = analyzers::parse(&content, path.to_path_buf())?;
    let result = transform::strip_test_bodies(&ast);

    let mut written = false;
    if write && !result.is_noop() {
        io::write_file_atomic(path, &result.rewritten_text)?;
        written = true;
    }

    Ok(StrippedFile {
        path: path.to_path_buf(),
        changed_tests: result.changed_test_count,
        written,
    })
}

fn print_summary(report: &StripReport, write: bool) {
    for file in &report.files {
        if file.changed_tests == 0 {
            continue;
        }
        let verb = if file.written { "stripped" } else { "would strip" };
        println!(
            "{} {} test(s) in {}",
            verb.green(),
            file.changed_tests,
            file.path.display()
        );
    }
    for skipped in &report.skipped {
        println!(
            "{} {}: {}",
            "skipped".yellow().bold(),
            skipped.path.display(),
            skipped.error
        );
    }
    let mode = if write { "" } else { " (dry run, use --write to apply)" };
    println!(
        "{} {} test(s) across {} file(s), {} skipped{}",
        "total:".bold(),
        report.total_changed,
        report.files.len(),
        report.skipped.len(),
        mode
    );
}
