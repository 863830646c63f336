//! Structured verdicts returned by randomness tests.
//!
//! A [`TestResult`] is created fresh by every `run` call and is immutable once
//! returned. Its status is derived from its warnings at construction time, so
//! `status == Warning` holds exactly when the warnings list is non-empty.
//!
//! Results serialise with serde (non-finite statistics become JSON `null`)
//! and render as indented text through `Display`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall status of a test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    /// Completed without caveats.
    Ok,
    /// Completed, but at least one warning is attached.
    Warning,
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Ok => write!(f, "ok"),
            TestStatus::Warning => write!(f, "warning"),
        }
    }
}

/// Optional knobs shared by all randomness tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOptions {
    /// Requested number of equiprobable intervals (uniformity test only).
    ///
    /// `None` lets the test choose; values below 2 are raised to 2 with a warning.
    pub bins: Option<usize>,
}

impl TestOptions {
    /// Options with an explicit bin count.
    pub fn with_bins(bins: usize) -> Self {
        Self { bins: Some(bins) }
    }
}

/// One row of the uniformity test's per-interval table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalRow {
    /// Bracketed bounds, e.g. `[0.2000, 0.3000)` or `[0.9000, 1.0000]`.
    pub interval: String,
    /// Lower edge.
    pub lower: f64,
    /// Upper edge.
    pub upper: f64,
    /// Observed count O_i.
    pub observed: usize,
    /// Expected count E = n/m.
    pub expected: f64,
    /// Contribution (O_i - E)² / E.
    pub term: f64,
}

/// Test-specific statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TestDetails {
    /// Mean (Z) test.
    Mean {
        /// Sample mean ū
        mean: f64,
        /// Z = √(12n)(ū − 0.5)
        z: f64,
        /// Two-sided critical value z_{1−α/2}
        z_critical: f64,
    },
    /// Variance (chi-square) test.
    Variance {
        /// Sample mean
        mean: f64,
        /// Unbiased sample variance S²
        s2: f64,
        /// Reference variance σ₀² = 1/12
        sigma0_sq: f64,
        /// Q = (n−1)S²/σ₀²
        q: f64,
        /// Degrees of freedom
        df: usize,
        /// Lower acceptance bound χ²_{α/2,df}
        chi2_lower: f64,
        /// Upper acceptance bound χ²_{1−α/2,df}
        chi2_upper: f64,
        /// Acceptance interval for S² itself
        s2_interval: [f64; 2],
    },
    /// Uniformity (chi-square goodness-of-fit) test.
    Uniformity {
        /// Number of intervals actually used
        m: usize,
        /// Degrees of freedom
        df: usize,
        /// Σ (O_i − E)² / E
        chi2_stat: f64,
        /// Right-tail critical value χ²_{1−α,df}
        chi2_critical: f64,
        /// Per-interval breakdown
        table: Vec<IntervalRow>,
    },
}

impl TestDetails {
    /// The primary statistic (Z, Q or χ²).
    pub fn statistic(&self) -> f64 {
        match self {
            TestDetails::Mean { z, .. } => *z,
            TestDetails::Variance { q, .. } => *q,
            TestDetails::Uniformity { chi2_stat, .. } => *chi2_stat,
        }
    }

    /// Critical value(s) the statistic is compared against.
    pub fn critical_values(&self) -> Vec<f64> {
        match self {
            TestDetails::Mean { z_critical, .. } => vec![*z_critical],
            TestDetails::Variance {
                chi2_lower,
                chi2_upper,
                ..
            } => vec![*chi2_lower, *chi2_upper],
            TestDetails::Uniformity { chi2_critical, .. } => vec![*chi2_critical],
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            TestDetails::Mean {
                mean,
                z,
                z_critical,
            } => vec![
                ("mean", fmt_num(*mean)),
                ("Z", fmt_num(*z)),
                ("z_crit (1-alpha/2)", fmt_num(*z_critical)),
            ],
            TestDetails::Variance {
                mean,
                s2,
                sigma0_sq,
                q,
                df,
                chi2_lower,
                chi2_upper,
                s2_interval,
            } => vec![
                ("mean", fmt_num(*mean)),
                ("S2", fmt_num(*s2)),
                ("sigma0_sq", fmt_num(*sigma0_sq)),
                ("Q", fmt_num(*q)),
                ("df", df.to_string()),
                ("chi2_lower", fmt_num(*chi2_lower)),
                ("chi2_upper", fmt_num(*chi2_upper)),
                (
                    "accept_interval_S2",
                    format!("[{}, {}]", fmt_num(s2_interval[0]), fmt_num(s2_interval[1])),
                ),
            ],
            TestDetails::Uniformity {
                m,
                df,
                chi2_stat,
                chi2_critical,
                ..
            } => vec![
                ("m", m.to_string()),
                ("df", df.to_string()),
                ("chi2_stat", fmt_num(*chi2_stat)),
                ("chi2_crit (1-alpha,df)", fmt_num(*chi2_critical)),
            ],
        }
    }
}

/// Verdict of a single randomness test.
///
/// # Examples
/// ```
/// use prng_core::types::{TestDetails, TestResult, TestStatus};
///
/// let details = TestDetails::Mean { mean: 0.5, z: 0.0, z_critical: 1.96 };
/// let result = TestResult::builder("mean", 0.05, 3, details)
///     .p_value(1.0)
///     .decision(true, "Passes the mean test at level alpha")
///     .warning("n=3 < 10: small sample")
///     .build();
///
/// assert_eq!(result.status(), TestStatus::Warning);
/// assert_eq!(result.warnings().len(), 1);
/// assert!(result.accept());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    test: String,
    alpha: f64,
    n: usize,
    #[serde(flatten)]
    details: TestDetails,
    p_value: f64,
    accept: bool,
    conclusion: String,
    status: TestStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

impl TestResult {
    /// Start building a result for test `test` at level `alpha` over `n` values.
    pub fn builder(
        test: impl Into<String>,
        alpha: f64,
        n: usize,
        details: TestDetails,
    ) -> TestResultBuilder {
        TestResultBuilder {
            test: test.into(),
            alpha,
            n,
            details,
            p_value: f64::NAN,
            accept: false,
            conclusion: String::new(),
            warnings: Vec::new(),
        }
    }

    /// Test identifier.
    pub fn test(&self) -> &str {
        &self.test
    }

    /// Significance level.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Sample size.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Test-specific statistics.
    pub fn details(&self) -> &TestDetails {
        &self.details
    }

    /// Primary statistic.
    pub fn statistic(&self) -> f64 {
        self.details.statistic()
    }

    /// Critical value(s).
    pub fn critical_values(&self) -> Vec<f64> {
        self.details.critical_values()
    }

    /// p-value (NaN when undefined).
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Whether the null hypothesis of uniformity survives.
    pub fn accept(&self) -> bool {
        self.accept
    }

    /// Human-readable conclusion.
    pub fn conclusion(&self) -> &str {
        &self.conclusion
    }

    /// `Warning` iff [`warnings`](Self::warnings) is non-empty.
    pub fn status(&self) -> TestStatus {
        self.status
    }

    /// Ordered warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Per-interval table, present for the uniformity test only.
    pub fn table(&self) -> Option<&[IntervalRow]> {
        match &self.details {
            TestDetails::Uniformity { table, .. } => Some(table),
            _ => None,
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.test)?;
        writeln!(f, "  alpha: {}", self.alpha)?;
        writeln!(f, "  n: {}", self.n)?;
        for (key, value) in self.details.fields() {
            writeln!(f, "  {}: {}", key, value)?;
        }
        writeln!(f, "  p_value: {}", fmt_num(self.p_value))?;
        writeln!(f, "  accept: {}", self.accept)?;
        writeln!(f, "  conclusion: {}", self.conclusion)?;
        writeln!(f, "  status: {}", self.status)?;
        if !self.warnings.is_empty() {
            writeln!(f, "  warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "    - {}", warning)?;
            }
        }
        if let Some(table) = self.table() {
            writeln!(f, "  table:")?;
            for row in table {
                writeln!(
                    f,
                    "    {}  O={}  E={:.4}  term={:.4}",
                    row.interval, row.observed, row.expected, row.term
                )?;
            }
        }
        Ok(())
    }
}

/// Builder for [`TestResult`].
#[derive(Debug, Clone)]
pub struct TestResultBuilder {
    test: String,
    alpha: f64,
    n: usize,
    details: TestDetails,
    p_value: f64,
    accept: bool,
    conclusion: String,
    warnings: Vec<String>,
}

impl TestResultBuilder {
    /// Set the p-value.
    pub fn p_value(mut self, p_value: f64) -> Self {
        self.p_value = p_value;
        self
    }

    /// Set the decision and its wording.
    pub fn decision(mut self, accept: bool, conclusion: impl Into<String>) -> Self {
        self.accept = accept;
        self.conclusion = conclusion.into();
        self
    }

    /// Append one warning.
    pub fn warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Append several warnings, keeping their order.
    pub fn warnings<I, S>(mut self, warnings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.warnings.extend(warnings.into_iter().map(Into::into));
        self
    }

    /// Finish the result; status follows from the collected warnings.
    pub fn build(self) -> TestResult {
        let status = if self.warnings.is_empty() {
            TestStatus::Ok
        } else {
            TestStatus::Warning
        };
        TestResult {
            test: self.test,
            alpha: self.alpha,
            n: self.n,
            details: self.details,
            p_value: self.p_value,
            accept: self.accept,
            conclusion: self.conclusion,
            status,
            warnings: self.warnings,
        }
    }
}

fn fmt_num(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{}", value)
    }
}
