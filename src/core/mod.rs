//! Common type definitions used across the crate

pub mod errors;

pub use errors::{Error, Result};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Syntax dialect of a spec file, detected from its file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl Dialect {
    /// Detect the dialect from a file name's final extension
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext {
            "js" => Some(Dialect::JavaScript),
            "jsx" => Some(Dialect::Jsx),
            "ts" => Some(Dialect::TypeScript),
            "tsx" => Some(Dialect::Tsx),
            _ => None,
        }
    }

    /// Get the display name for this dialect
    pub fn display_name(&self) -> &str {
        match self {
            Dialect::JavaScript => "JavaScript",
            Dialect::Jsx => "JavaScript (JSX)",
            Dialect::TypeScript => "TypeScript",
            Dialect::Tsx => "TypeScript (TSX)",
        }
    }
}

/// Behavioral category of a classified command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CommandCategory {
    /// UI interaction (click, type, select, ...)
    Action,
    /// Chained assertion (should, and, contains)
    Assertion,
    /// Network interception and synchronization
    NetworkStub,
    /// Session and fixture setup helpers
    DataSetup,
    /// Not in the taxonomy; kept so totals stay auditable
    Unclassified,
}

impl CommandCategory {
    pub fn display_name(&self) -> &str {
        match self {
            CommandCategory::Action => "action",
            CommandCategory::Assertion => "assertion",
            CommandCategory::NetworkStub => "network-stub",
            CommandCategory::DataSetup => "data-setup",
            CommandCategory::Unclassified => "unclassified",
        }
    }

    /// Unclassified commands are excluded from density scoring
    pub fn scorable(&self) -> bool {
        !matches!(self, CommandCategory::Unclassified)
    }
}

/// Half-open byte range into a file's source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// One classified call expression found during a tree walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOccurrence {
    /// Member name invoked on the receiver
    pub callee: String,
    pub category: CommandCategory,
    /// 1-based line of the member name
    pub line: usize,
    /// 0-based column of the member name
    pub column: usize,
    /// Description of the innermost enclosing test, if any
    pub enclosing_test: Option<String>,
    /// Index into the file's test list; disambiguates duplicate names
    pub enclosing_test_index: Option<usize>,
}

/// A named test declaration (`it`/`specify` with description and body)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Description string, exactly as written between its quotes
    pub name: String,
    /// Names of enclosing `describe`/`context` suites, outermost first
    pub suites: Vec<String>,
    pub line: usize,
    pub column: usize,
    /// Byte range of the body block, braces included
    pub body_span: SourceSpan,
    /// Statements in the body; zero means already stripped
    pub statement_count: usize,
}

/// Counts per command category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub action: usize,
    pub assertion: usize,
    pub network_stub: usize,
    pub data_setup: usize,
    pub unclassified: usize,
}

impl CategoryCounts {
    pub fn record(&mut self, category: CommandCategory) {
        match category {
            CommandCategory::Action => self.action += 1,
            CommandCategory::Assertion => self.assertion += 1,
            CommandCategory::NetworkStub => self.network_stub += 1,
            CommandCategory::DataSetup => self.data_setup += 1,
            CommandCategory::Unclassified => self.unclassified += 1,
        }
    }

    pub fn get(&self, category: CommandCategory) -> usize {
        match category {
            CommandCategory::Action => self.action,
            CommandCategory::Assertion => self.assertion,
            CommandCategory::NetworkStub => self.network_stub,
            CommandCategory::DataSetup => self.data_setup,
            CommandCategory::Unclassified => self.unclassified,
        }
    }

    /// All occurrences, unclassified included
    pub fn total(&self) -> usize {
        self.action + self.assertion + self.network_stub + self.data_setup + self.unclassified
    }

    /// Occurrences that matched the taxonomy
    pub fn classified(&self) -> usize {
        self.total() - self.unclassified
    }

    pub fn add(&mut self, other: &CategoryCounts) {
        self.action += other.action;
        self.assertion += other.assertion;
        self.network_stub += other.network_stub;
        self.data_setup += other.data_setup;
        self.unclassified += other.unclassified;
    }
}

/// Aggregated counts for one test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestMetrics {
    pub name: String,
    pub suites: Vec<String>,
    pub line: usize,
    pub counts: CategoryCounts,
    /// action count / max(1, classified command count)
    pub action_density: f64,
}

/// Aggregated counts for one spec file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMetrics {
    pub path: PathBuf,
    pub dialect: Dialect,
    pub tests: Vec<TestMetrics>,
    /// Occurrences outside any test body (hooks, suite scope)
    pub file_level: CategoryCounts,
    pub totals: CategoryCounts,
    /// Member names that fell through the taxonomy, deduplicated, sorted
    pub unclassified_names: Vec<String>,
}

/// A file the batch pass could not process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: String,
}

/// Run-level rollup for the analyze pipeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_parsed: usize,
    pub files_skipped: usize,
    pub total_tests: usize,
    pub totals: CategoryCounts,
}

/// Full report of one analyze pass over a test root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub files: Vec<FileMetrics>,
    pub skipped: Vec<SkippedFile>,
    pub summary: RunSummary,
}

impl RunReport {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            files: Vec::new(),
            skipped: Vec::new(),
            summary: RunSummary::default(),
        }
    }

    /// Recompute the summary from the per-file results
    pub fn finalize(&mut self) {
        let mut summary = RunSummary {
            files_scanned: self.files.len() + self.skipped.len(),
            files_parsed: self.files.len(),
            files_skipped: self.skipped.len(),
            ..RunSummary::default()
        };
        for file in &self.files {
            summary.total_tests += file.tests.len();
            summary.totals.add(&file.totals);
        }
        self.summary = summary;
    }
}

/// Outcome of the body-stripping transform on one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformResult {
    pub path: PathBuf,
    pub original_text: String,
    pub rewritten_text: String,
    pub changed_test_count: usize,
}

impl TransformResult {
    pub fn is_noop(&self) -> bool {
        self.changed_test_count == 0
    }
}

/// One file's outcome in a strip run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrippedFile {
    pub path: PathBuf,
    pub changed_tests: usize,
    pub written: bool,
}

/// Full report of one strip pass over a test root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripReport {
    pub root: PathBuf,
    pub files: Vec<StrippedFile>,
    pub skipped: Vec<SkippedFile>,
    pub total_changed: usize,
}

impl StripReport {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            files: Vec::new(),
            skipped: Vec::new(),
            total_changed: 0,
        }
    }
}
