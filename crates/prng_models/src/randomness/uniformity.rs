//! Chi-square goodness-of-fit test over equiprobable intervals.
//!
//! [0, 1] is split into m equal intervals `[e_i, e_{i+1})`, the last one
//! closed. With observed counts O_i and expected count E = n/m,
//!
//! ```text
//! χ² = Σ (O_i − E)² / E  ~  χ²(m − 1)
//! ```
//!
//! H0 is kept when χ² ≤ χ²_{1−α, m−1}.

use prng_core::math::distributions::{chi2_quantile, chi2_sf};
use prng_core::traits::{validate_alpha, RandomnessTest};
use prng_core::types::{ConfigError, IntervalRow, TestDetails, TestOptions, TestResult};
use tracing::debug;

use super::{sample_warnings, Support, MIN_RELIABLE_N};

/// Minimum expected count per interval for the chi-square approximation.
pub const MIN_EXPECTED_COUNT: usize = 5;

/// Outcome of the bin-count policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinSelection {
    /// Number of intervals to use.
    pub bins: usize,
    /// Adjustments made to a caller-supplied count.
    pub warnings: Vec<String>,
}

/// Choose the number of intervals for `n` values.
///
/// Without a request: `m = max(2, ⌊√n⌋)`, silently capped at
/// `max(2, ⌊n/5⌋)` once `n ≥ 10`. A requested `m < 2` becomes 2, and a
/// requested `m` leaving fewer than 5 expected values per interval (with
/// `n ≥ 10`) is reduced to `max(2, ⌊n/5⌋)`. Below 10 values a requested
/// `m` above `max(2, n)` is reduced to that bound. Every adjustment warns.
///
/// # Examples
/// ```
/// use prng_models::randomness::select_bins;
///
/// assert_eq!(select_bins(100, None).bins, 10);
///
/// let adjusted = select_bins(20, Some(10));
/// assert_eq!(adjusted.bins, 4);
/// assert_eq!(adjusted.warnings.len(), 1);
/// ```
pub fn select_bins(n: usize, requested: Option<usize>) -> BinSelection {
    let cap = (n / MIN_EXPECTED_COUNT).max(2);
    let mut warnings = Vec::new();

    let bins = match requested {
        None => {
            let bins = integer_sqrt(n).max(2);
            if n >= MIN_RELIABLE_N {
                bins.min(cap)
            } else {
                bins
            }
        }
        Some(requested) => {
            let mut bins = requested;
            if bins < 2 {
                warnings.push(format!("m={} < 2: using m=2", bins));
                bins = 2;
            }
            if n >= MIN_RELIABLE_N && bins > n / MIN_EXPECTED_COUNT {
                warnings.push(format!(
                    "m={} leaves n/m={:.2} < {}: reduced to m={}",
                    bins,
                    n as f64 / bins as f64,
                    MIN_EXPECTED_COUNT,
                    cap
                ));
                bins = cap;
            } else if n < MIN_RELIABLE_N && bins > n.max(2) {
                let reduced = n.max(2);
                warnings.push(format!(
                    "m={} exceeds n={}: reduced to m={}",
                    bins, n, reduced
                ));
                bins = reduced;
            }
            bins
        }
    };

    BinSelection { bins, warnings }
}

/// ⌊√n⌋ without floating-point drift.
fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root
}

/// Chi-square test of equal interval frequencies.
///
/// # Examples
/// ```
/// use prng_core::traits::RandomnessTest;
/// use prng_core::types::TestOptions;
/// use prng_models::randomness::UniformityChiSquareTest;
///
/// let values: Vec<f64> = (0..100).map(|i| (i as f64 + 0.5) / 100.0).collect();
/// let result = UniformityChiSquareTest::new()
///     .run(&values, 0.05, &TestOptions::default())
///     .unwrap();
///
/// assert_eq!(result.statistic(), 0.0);
/// assert_eq!(result.table().map(|t| t.len()), Some(10));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UniformityChiSquareTest;

impl UniformityChiSquareTest {
    /// Create a new uniformity test.
    pub fn new() -> Self {
        Self
    }
}

impl RandomnessTest for UniformityChiSquareTest {
    fn test_id(&self) -> &'static str {
        "uniformity-chi2"
    }

    fn run(
        &self,
        sequence: &[f64],
        alpha: f64,
        options: &TestOptions,
    ) -> Result<TestResult, ConfigError> {
        let alpha = validate_alpha(alpha)?;
        let n = sequence.len();
        let selection = select_bins(n, options.bins);
        let m = selection.bins;
        let df = m.saturating_sub(1).max(1);

        let edges: Vec<f64> = (0..=m)
            .map(|i| if i == m { 1.0 } else { i as f64 / m as f64 })
            .collect();
        let mut observed = vec![0usize; m];
        for &value in sequence {
            if !(0.0..=1.0).contains(&value) {
                continue;
            }
            // Interior edges at or below the value; 1.0 lands in the last bin.
            let index = edges[1..m].partition_point(|&edge| edge <= value);
            observed[index] += 1;
        }

        let expected = n as f64 / m as f64;
        let table: Vec<IntervalRow> = observed
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let (lower, upper) = (edges[i], edges[i + 1]);
                let close = if i + 1 == m { ']' } else { ')' };
                IntervalRow {
                    interval: format!("[{:.4}, {:.4}{}", lower, upper, close),
                    lower,
                    upper,
                    observed: count,
                    expected,
                    term: (count as f64 - expected).powi(2) / expected,
                }
            })
            .collect();

        let chi2_stat: f64 = table.iter().map(|row| row.term).sum();
        let chi2_critical = chi2_quantile(1.0 - alpha, df as f64);
        let p_value = chi2_sf(chi2_stat, df as f64);
        let accept = chi2_stat <= chi2_critical;

        let mut warnings = sample_warnings(sequence, Support::Closed);
        warnings.extend(selection.warnings);
        if expected < MIN_EXPECTED_COUNT as f64 {
            warnings.push(format!(
                "Expected count per interval n/m={:.2} < {}: the chi-square approximation may be poor",
                expected, MIN_EXPECTED_COUNT
            ));
        }

        debug!(
            test = self.test_id(),
            n,
            m,
            alpha,
            chi2_stat,
            p_value,
            accept,
            "ran uniformity test"
        );

        let conclusion = if n == 0 {
            "Undefined: the sequence is empty"
        } else if accept {
            "Do not reject H0: interval frequencies are consistent with Uniform[0,1]"
        } else {
            "Reject H0: interval frequencies deviate from Uniform[0,1]"
        };
        let details = TestDetails::Uniformity {
            m,
            df,
            chi2_stat,
            chi2_critical,
            table,
        };
        Ok(TestResult::builder(self.test_id(), alpha, n, details)
            .p_value(p_value)
            .decision(accept, conclusion)
            .warnings(warnings)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use prng_core::types::TestStatus;

    fn run(values: &[f64], bins: Option<usize>) -> TestResult {
        UniformityChiSquareTest::new()
            .run(values, 0.05, &TestOptions { bins })
            .unwrap()
    }

    #[test]
    fn test_integer_sqrt() {
        let cases = [(0, 0), (1, 1), (3, 1), (4, 2), (99, 9), (100, 10), (10_001, 100)];
        for (n, root) in cases {
            assert_eq!(integer_sqrt(n), root);
        }
    }

    #[test]
    fn test_select_bins_automatic() {
        assert_eq!(select_bins(100, None), BinSelection { bins: 10, warnings: vec![] });
        // √30 = 5 but 30/5 = 6 is fine; √12 = 3 capped at max(2, 2) = 2
        assert_eq!(select_bins(30, None).bins, 5);
        assert_eq!(select_bins(12, None).bins, 2);
        assert_eq!(select_bins(0, None).bins, 2);
        // Below 10 no cap applies.
        assert_eq!(select_bins(9, None).bins, 3);
        assert!(select_bins(9, None).warnings.is_empty());
    }

    #[test]
    fn test_select_bins_requested() {
        let adjusted = select_bins(20, Some(10));
        assert_eq!(adjusted.bins, 4);
        assert_eq!(adjusted.warnings, vec!["m=10 leaves n/m=2.00 < 5: reduced to m=4"]);

        let floored = select_bins(100, Some(1));
        assert_eq!(floored.bins, 2);
        assert_eq!(floored.warnings, vec!["m=1 < 2: using m=2"]);

        let kept = select_bins(100, Some(20));
        assert_eq!(kept.bins, 20);
        assert!(kept.warnings.is_empty());

        // Small samples keep the requested count.
        assert_eq!(select_bins(8, Some(6)).bins, 6);
    }

    #[test]
    fn test_select_bins_huge_request_is_bounded() {
        let large = select_bins(20, Some(usize::MAX / 2));
        assert_eq!(large.bins, 4);
        assert_eq!(large.warnings.len(), 1);
        assert!(large.warnings[0].ends_with("reduced to m=4"));

        assert_eq!(select_bins(1_000, Some(usize::MAX)).bins, 200);

        let small = select_bins(3, Some(1 << 61));
        assert_eq!(small.bins, 3);
        assert_eq!(small.warnings, vec![format!("m={} exceeds n=3: reduced to m=3", 1usize << 61)]);

        assert_eq!(select_bins(0, Some(usize::MAX)).bins, 2);
        assert_eq!(select_bins(8, Some(9)).bins, 8);
    }

    #[test]
    fn test_huge_bin_request_completes() {
        let result = run(&[0.1, 0.5, 0.9], Some(1 << 61));
        assert_eq!(result.table().map(|t| t.len()), Some(3));
        assert_eq!(result.status(), TestStatus::Warning);
        assert!(result.warnings().iter().any(|w| w.contains("exceeds n=3")));

        let values: Vec<f64> = (0..20).map(|i| (i as f64 + 0.5) / 20.0).collect();
        let result = run(&values, Some(usize::MAX));
        assert_eq!(result.table().map(|t| t.len()), Some(4));
    }

    #[test]
    fn test_perfectly_even_sample() {
        let values: Vec<f64> = (0..100).map(|i| (i as f64 + 0.5) / 100.0).collect();
        let result = run(&values, None);

        assert_eq!(result.statistic(), 0.0);
        assert_relative_eq!(result.p_value(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(result.critical_values()[0], 16.918_977_604_620_45, epsilon = 1e-8);
        assert!(result.accept());
        assert_eq!(result.status(), TestStatus::Ok);
    }

    #[test]
    fn test_critical_value_at_tiny_alpha() {
        // df = 2: χ²_{1−α} = −2 ln α in closed form.
        let alpha = 1e-12;
        let values: Vec<f64> = (0..30).map(|i| (i as f64 + 0.5) / 30.0).collect();
        let result = UniformityChiSquareTest::new()
            .run(&values, alpha, &TestOptions::with_bins(3))
            .unwrap();
        let expected = -2.0 * (-(1.0 - alpha)).ln_1p();
        assert_relative_eq!(result.critical_values()[0], expected, max_relative = 1e-9);
        assert!(result.critical_values()[0] < 55.3);
    }

    #[test]
    fn test_interval_table_brackets() {
        let values: Vec<f64> = (0..50).map(|i| i as f64 / 49.0).collect();
        let result = run(&values, Some(5));
        let table = result.table().unwrap();

        assert_eq!(table.len(), 5);
        assert_eq!(table[0].interval, "[0.0000, 0.2000)");
        assert_eq!(table[4].interval, "[0.8000, 1.0000]");
        assert_eq!(table.iter().map(|r| r.observed).sum::<usize>(), 50);
        assert!(table.iter().all(|r| r.expected == 10.0));
    }

    #[test]
    fn test_edges_are_half_open() {
        // 0.5 sits on an interior edge and belongs to the upper interval;
        // 1.0 belongs to the closed last interval.
        let values = [0.0, 0.25, 0.5, 0.75, 1.0, 0.1, 0.2, 0.55, 0.6, 0.9];
        let result = run(&values, Some(2));
        let counts: Vec<usize> = result.table().unwrap().iter().map(|r| r.observed).collect();
        assert_eq!(counts, vec![4, 6]);
    }

    #[test]
    fn test_statistic_from_counts() {
        // 20 values: 8 in [0, 0.5), 12 in [0.5, 1]; E = 10
        let mut values = vec![0.2; 8];
        values.extend(vec![0.7; 12]);
        let result = run(&values, Some(2));

        assert_relative_eq!(result.statistic(), 0.8, epsilon = 1e-12);
        let table = result.table().unwrap();
        assert_relative_eq!(table[0].term, 0.4, epsilon = 1e-12);
        assert_relative_eq!(table[1].term, 0.4, epsilon = 1e-12);
        assert!(result.accept());
    }

    #[test]
    fn test_out_of_range_values_are_not_binned() {
        let mut values: Vec<f64> = (0..20).map(|i| (i as f64 + 0.5) / 20.0).collect();
        values.push(1.5);
        values.push(-0.1);
        let result = run(&values, Some(2));
        let table = result.table().unwrap();

        assert_eq!(table.iter().map(|r| r.observed).sum::<usize>(), 20);
        assert_eq!(table[0].expected, 11.0);
        assert!(result
            .warnings()
            .iter()
            .any(|w| w == "2 value(s) outside the nominal support [0, 1]"));
    }

    #[test]
    fn test_low_expected_count_always_warns() {
        // n = 8 < 10: no reduction, but n/m = 2 < 5 still warns.
        let values = [0.1, 0.2, 0.3, 0.4, 0.6, 0.7, 0.8, 0.9];
        let result = run(&values, Some(4));
        assert_eq!(result.details().critical_values().len(), 1);
        assert!(result.warnings().iter().any(|w| w.starts_with("Expected count per interval n/m=2.00")));
        assert_eq!(result.status(), TestStatus::Warning);
    }

    #[test]
    fn test_empty_sequence_rejects() {
        let result = run(&[], None);
        assert!(result.statistic().is_nan());
        assert!(!result.accept());
        assert_eq!(result.conclusion(), "Undefined: the sequence is empty");
    }

    #[test]
    fn test_adjustment_warning_present() {
        let values: Vec<f64> = (0..20).map(|i| (i as f64 + 0.5) / 20.0).collect();
        let result = run(&values, Some(10));
        match result.details() {
            TestDetails::Uniformity { m, df, .. } => {
                assert_eq!(*m, 4);
                assert_eq!(*df, 3);
            }
            other => panic!("Expected uniformity details, got {:?}", other),
        }
        assert_eq!(result.warnings(), &["m=10 leaves n/m=2.00 < 5: reduced to m=4"]);
    }
}
