//! Per-test and per-file aggregation
//!
//! Aggregation is a pure function of the extracted occurrences and test
//! cases: the same input always yields the same `FileMetrics`, and the
//! per-test counts plus the file-level bucket always sum to the totals.

use crate::analyzers::commands::FileCommands;
use crate::core::{CategoryCounts, Dialect, FileMetrics, TestMetrics};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Aggregate one file's extracted commands into metrics
pub fn aggregate(path: PathBuf, dialect: Dialect, commands: &FileCommands) -> FileMetrics {
    let mut per_test: Vec<CategoryCounts> = vec![CategoryCounts::default(); commands.tests.len()];
    let mut file_level = CategoryCounts::default();
    let mut totals = CategoryCounts::default();
    let mut unclassified = BTreeSet::new();

    for occurrence in &commands.occurrences {
        totals.record(occurrence.category);
        if !occurrence.category.scorable() {
            unclassified.insert(occurrence.callee.clone());
        }
        match occurrence.enclosing_test_index {
            Some(index) if index < per_test.len() => per_test[index].record(occurrence.category),
            // Setup/teardown scope goes to the file-level bucket, never dropped
            _ => file_level.record(occurrence.category),
        }
    }

    let tests = commands
        .tests
        .iter()
        .zip(per_test)
        .map(|(test, counts)| TestMetrics {
            name: test.name.clone(),
            suites: test.suites.clone(),
            line: test.line,
            counts,
            action_density: action_density(&counts),
        })
        .collect();

    FileMetrics {
        path,
        dialect,
        tests,
        file_level,
        totals,
        unclassified_names: unclassified.into_iter().collect(),
    }
}

/// Share of classified commands that are UI actions
pub fn action_density(counts: &CategoryCounts) -> f64 {
    counts.action as f64 / counts.classified().max(1) as f64
}

/// Externally measured timing for one test; this crate never measures
/// wall-clock time itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestTiming {
    pub duration_ms: u64,
}

/// Pluggable efficiency scoring. The normalization formula belongs to the
/// caller; the aggregator only guarantees the raw counts.
pub trait ScoringPolicy {
    fn score(&self, counts: &CategoryCounts, timing: &TestTiming) -> f64;
}

impl<F> ScoringPolicy for F
where
    F: Fn(&CategoryCounts, &TestTiming) -> f64,
{
    fn score(&self, counts: &CategoryCounts, timing: &TestTiming) -> f64 {
        self(counts, timing)
    }
}

impl TestMetrics {
    /// Apply a caller-supplied scoring policy to this test's counts
    pub fn score_with(&self, policy: &dyn ScoringPolicy, timing: &TestTiming) -> f64 {
        policy.score(&self.counts, timing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::{commands::extract_commands, parse};
    use crate::core::CommandCategory;

    fn metrics_for(source: &str) -> FileMetrics {
        let path = PathBuf::from("fixture.spec.js");
        let ast = parse(source, path.clone()).unwrap();
        let commands = extract_commands(&ast);
        aggregate(path, Dialect::JavaScript, &commands)
    }

    #[test]
    fn three_clicks_one_should() {
        let metrics = metrics_for(
            "it('busy', () => {\n  cy.get('#a').click();\n  cy.get('#b').click();\n  cy.get('#c').click();\n  cy.get('#a').should('be.visible');\n});",
        );
        assert_eq!(metrics.tests.len(), 1);
        let counts = &metrics.tests[0].counts;
        assert_eq!(counts.action, 3);
        assert_eq!(counts.assertion, 1);
    }

    #[test]
    fn counts_are_conserved_across_buckets() {
        let metrics = metrics_for(
            "beforeEach(() => { cy.visit('/'); });\nit('one', () => { cy.get('#a').click(); });\nit('two', () => { cy.get('#b').should('exist'); });",
        );
        for category in crate::analyzers::taxonomy::all_categories() {
            let per_test: usize = metrics.tests.iter().map(|t| t.counts.get(category)).sum();
            assert_eq!(
                per_test + metrics.file_level.get(category),
                metrics.totals.get(category),
                "{}",
                category.display_name()
            );
        }
        assert_eq!(metrics.file_level.get(CommandCategory::DataSetup), 1);
    }

    #[test]
    fn duplicate_test_names_stay_distinct() {
        let metrics = metrics_for(
            "it('same', () => { cy.get('#a').click(); });\nit('same', () => { cy.get('#b').click(); cy.get('#b').click(); });",
        );
        assert_eq!(metrics.tests.len(), 2);
        assert_eq!(metrics.tests[0].counts.action, 1);
        assert_eq!(metrics.tests[1].counts.action, 2);
    }

    #[test]
    fn density_ignores_unclassified() {
        let metrics = metrics_for(
            "it('dense', () => { cy.get('#a').click(); cy.get('#a').should('exist'); });",
        );
        // get is unclassified; click + should are the classified population
        assert!((metrics.tests[0].action_density - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn density_of_empty_counts_is_zero() {
        assert_eq!(action_density(&CategoryCounts::default()), 0.0);
    }

    #[test]
    fn unclassified_names_are_surfaced_sorted() {
        let metrics = metrics_for(
            "it('odd', () => { cy.zulu(); cy.alpha(); cy.zulu(); });",
        );
        assert_eq!(metrics.unclassified_names, ["alpha", "zulu"]);
    }

    #[test]
    fn scoring_policy_is_pluggable() {
        let metrics =
            metrics_for("it('scored', () => { cy.get('#a').click(); cy.get('#b').click(); });");
        let per_second = |counts: &CategoryCounts, timing: &TestTiming| {
            counts.action as f64 / (timing.duration_ms as f64 / 1000.0)
        };
        let score = metrics.tests[0].score_with(&per_second, &TestTiming { duration_ms: 4000 });
        assert!((score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn aggregation_is_deterministic() {
        let src = "it('a', () => { cy.visit('/'); cy.get('#a').click(); });";
        assert_eq!(metrics_for(src), metrics_for(src));
    }
}
