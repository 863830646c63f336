//! Run several randomness tests over one sequence.
//!
//! Results come back in the order the tests were given. Warnings from all
//! results are merged into one list with duplicates removed, keeping the
//! order in which they first appeared (the small-sample warning, for
//! instance, is raised by every test but reported once).

use prng_core::traits::{validate_alpha, RandomnessTest};
use prng_core::types::{ConfigError, TestOptions, TestResult};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

use super::test_enum::{RandomnessTestEnum, TestKind};

/// Results of a suite run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SuiteReport {
    /// One result per test, in suite order.
    pub results: Vec<TestResult>,
    /// De-duplicated warnings across all results, first-seen order.
    pub warnings: Vec<String>,
}

impl SuiteReport {
    fn from_results(results: Vec<TestResult>) -> Self {
        let mut seen = HashSet::new();
        let warnings: Vec<String> = results
            .iter()
            .flat_map(|result| result.warnings())
            .filter(|warning| seen.insert(*warning))
            .cloned()
            .collect();
        Self { results, warnings }
    }

    /// Whether every test kept H0.
    pub fn all_accepted(&self) -> bool {
        self.results.iter().all(TestResult::accept)
    }
}

/// An ordered list of tests run together.
///
/// # Examples
/// ```
/// use prng_core::types::TestOptions;
/// use prng_models::randomness::TestSuite;
///
/// let values = [0.2, 0.8, 0.5];
/// let report = TestSuite::all().run(&values, 0.05, &TestOptions::default()).unwrap();
///
/// assert_eq!(report.results.len(), 3);
/// // Each test flags n < 10; the report lists it once.
/// assert_eq!(
///     report.warnings.iter().filter(|w| w.starts_with("n=3 < 10")).count(),
///     1
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestSuite {
    tests: Vec<RandomnessTestEnum>,
}

impl TestSuite {
    /// Suite over the given tests.
    pub fn new(tests: Vec<RandomnessTestEnum>) -> Self {
        Self { tests }
    }

    /// Suite of all three tests in catalog order.
    pub fn all() -> Self {
        Self::from_kinds(&TestKind::ALL)
    }

    /// Suite over the given kinds, in order.
    pub fn from_kinds(kinds: &[TestKind]) -> Self {
        Self::new(kinds.iter().map(|&kind| RandomnessTestEnum::new(kind)).collect())
    }

    /// Tests in this suite.
    pub fn tests(&self) -> &[RandomnessTestEnum] {
        &self.tests
    }

    /// Run every test in turn.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidAlpha` before any test runs.
    pub fn run(
        &self,
        sequence: &[f64],
        alpha: f64,
        options: &TestOptions,
    ) -> Result<SuiteReport, ConfigError> {
        let alpha = validate_alpha(alpha)?;
        let results = self
            .tests
            .iter()
            .map(|test| test.run(sequence, alpha, options))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.finish(results))
    }

    /// Run the tests concurrently over the shared sequence.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidAlpha` before any test runs.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(
        &self,
        sequence: &[f64],
        alpha: f64,
        options: &TestOptions,
    ) -> Result<SuiteReport, ConfigError> {
        use rayon::prelude::*;

        let alpha = validate_alpha(alpha)?;
        let results = self
            .tests
            .par_iter()
            .map(|test| test.run(sequence, alpha, options))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.finish(results))
    }

    /// Sequential fallback when the parallel feature is disabled.
    #[cfg(not(feature = "parallel"))]
    pub fn run_parallel(
        &self,
        sequence: &[f64],
        alpha: f64,
        options: &TestOptions,
    ) -> Result<SuiteReport, ConfigError> {
        self.run(sequence, alpha, options)
    }

    fn finish(&self, results: Vec<TestResult>) -> SuiteReport {
        let report = SuiteReport::from_results(results);
        for warning in &report.warnings {
            warn!(%warning, "randomness test warning");
        }
        debug!(
            tests = self.tests.len(),
            accepted = report.results.iter().filter(|r| r.accept()).count(),
            "suite finished"
        );
        report
    }
}

impl Default for TestSuite {
    fn default() -> Self {
        Self::all()
    }
}
