use crate::core::{FileMetrics, RunReport};
use colored::*;
use std::io::Write;

pub trait OutputWriter {
    fn write_report(&mut self, report: &RunReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &RunReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_file(&mut self, file: &FileMetrics) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", file.path.display().to_string().cyan().bold())?;
        for test in &file.tests {
            let context = if test.suites.is_empty() {
                String::new()
            } else {
                format!("{} > ", test.suites.join(" > "))
            };
            writeln!(
                self.writer,
                "  {}{} (line {})",
                context.dimmed(),
                test.name,
                test.line
            )?;
            writeln!(
                self.writer,
                "    actions: {}  assertions: {}  network: {}  setup: {}  other: {}  density: {:.2}",
                test.counts.action.to_string().green(),
                test.counts.assertion.to_string().green(),
                test.counts.network_stub,
                test.counts.data_setup,
                test.counts.unclassified,
                test.action_density,
            )?;
        }
        if file.file_level.total() > 0 {
            writeln!(
                self.writer,
                "  {} {} command(s) outside test bodies",
                "file-level:".dimmed(),
                file.file_level.total()
            )?;
        }
        if !file.unclassified_names.is_empty() {
            writeln!(
                self.writer,
                "  {} {}",
                "unclassified:".yellow(),
                file.unclassified_names.join(", ")
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &RunReport) -> anyhow::Result<()> {
        for file in &report.files {
            self.write_file(file)?;
        }

        for skipped in &report.skipped {
            writeln!(
                self.writer,
                "{} {}: {}",
                "skipped".yellow().bold(),
                skipped.path.display(),
                skipped.error
            )?;
        }

        let summary = &report.summary;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} {} file(s) scanned, {} parsed, {} skipped, {} test(s)",
            "summary:".bold(),
            summary.files_scanned,
            summary.files_parsed,
            summary.files_skipped,
            summary.total_tests
        )?;
        writeln!(
            self.writer,
            "  actions: {}  assertions: {}  network: {}  setup: {}  other: {}",
            summary.totals.action,
            summary.totals.assertion,
            summary.totals.network_stub,
            summary.totals.data_setup,
            summary.totals.unclassified
        )?;
        Ok(())
    }
}
