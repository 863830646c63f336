//! Variance test.
//!
//! A Uniform[0, 1] variable has variance σ₀² = 1/12. With the unbiased sample
//! variance S²,
//!
//! ```text
//! Q = (n − 1) · S² / σ₀²  ~  χ²(n − 1)
//! ```
//!
//! H0 is kept when χ²_{α/2} ≤ Q ≤ χ²_{1−α/2}. The same quantiles give an
//! acceptance interval for S² itself.

use prng_core::math::distributions::{chi2_cdf, chi2_quantile, chi2_sf};
use prng_core::traits::{validate_alpha, RandomnessTest};
use prng_core::types::{ConfigError, TestDetails, TestOptions, TestResult};
use tracing::debug;

use super::{sample_warnings, Support};

/// Variance of Uniform[0, 1].
pub const UNIFORM_VARIANCE: f64 = 1.0 / 12.0;

/// Two-sided chi-square test on the sample variance.
///
/// # Examples
/// ```
/// use prng_core::traits::RandomnessTest;
/// use prng_core::types::TestOptions;
/// use prng_models::randomness::VarianceTest;
///
/// let values: Vec<f64> = (0..20).map(|i| (i as f64 + 0.5) / 20.0).collect();
/// let result = VarianceTest::new().run(&values, 0.05, &TestOptions::default()).unwrap();
///
/// assert!(result.accept());
/// assert_eq!(result.critical_values().len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VarianceTest;

impl VarianceTest {
    /// Create a new variance test.
    pub fn new() -> Self {
        Self
    }
}

impl RandomnessTest for VarianceTest {
    fn test_id(&self) -> &'static str {
        "variance"
    }

    fn run(
        &self,
        sequence: &[f64],
        alpha: f64,
        _options: &TestOptions,
    ) -> Result<TestResult, ConfigError> {
        let alpha = validate_alpha(alpha)?;
        let n = sequence.len();
        let df = n.saturating_sub(1).max(1);
        let chi2_lower = chi2_quantile(alpha / 2.0, df as f64);
        let chi2_upper = chi2_quantile(1.0 - alpha / 2.0, df as f64);
        let warnings = sample_warnings(sequence, Support::Open);

        if n <= 1 {
            let details = TestDetails::Variance {
                mean: sequence.first().copied().unwrap_or(f64::NAN),
                s2: f64::NAN,
                sigma0_sq: UNIFORM_VARIANCE,
                q: f64::NAN,
                df,
                chi2_lower,
                chi2_upper,
                s2_interval: [f64::NAN, f64::NAN],
            };
            return Ok(TestResult::builder(self.test_id(), alpha, n, details)
                .warnings(warnings)
                .p_value(f64::NAN)
                .decision(false, "Undefined: at least two values are required")
                .build());
        }

        let dof = (n - 1) as f64;
        let mean = sequence.iter().sum::<f64>() / n as f64;
        let s2 = sequence.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / dof;
        let q = dof * s2 / UNIFORM_VARIANCE;
        let s2_interval = [
            UNIFORM_VARIANCE * chi2_lower / dof,
            UNIFORM_VARIANCE * chi2_upper / dof,
        ];
        let tail = chi2_cdf(q, df as f64).min(chi2_sf(q, df as f64));
        let p_value = (2.0 * tail).clamp(0.0, 1.0);
        let accept = chi2_lower <= q && q <= chi2_upper;

        debug!(test = self.test_id(), n, alpha, q, p_value, accept, "ran variance test");

        let conclusion = if accept {
            "Do not reject H0: the sample variance is consistent with 1/12"
        } else {
            "Reject H0: the sample variance differs significantly from 1/12"
        };
        let details = TestDetails::Variance {
            mean,
            s2,
            sigma0_sq: UNIFORM_VARIANCE,
            q,
            df,
            chi2_lower,
            chi2_upper,
            s2_interval,
        };
        Ok(TestResult::builder(self.test_id(), alpha, n, details)
            .warnings(warnings)
            .p_value(p_value)
            .decision(accept, conclusion)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use prng_core::types::TestStatus;

    fn run(values: &[f64], alpha: f64) -> TestResult {
        VarianceTest::new()
            .run(values, alpha, &TestOptions::default())
            .unwrap()
    }

    fn details(result: &TestResult) -> (f64, f64, usize, [f64; 2]) {
        match result.details() {
            TestDetails::Variance {
                s2,
                q,
                df,
                s2_interval,
                ..
            } => (*s2, *q, *df, *s2_interval),
            other => panic!("Expected variance details, got {:?}", other),
        }
    }

    #[test]
    fn test_evenly_spread_sample_is_accepted() {
        let values: Vec<f64> = (0..20).map(|i| i as f64 / 20.0 + 0.025).collect();
        let result = run(&values, 0.05);
        let (s2, q, df, _) = details(&result);

        assert_relative_eq!(s2, 0.0875, epsilon = 1e-12);
        assert_relative_eq!(q, 19.95, epsilon = 1e-10);
        assert_eq!(df, 19);
        assert_relative_eq!(result.p_value(), 2.0 * (1.0 - 0.602_407_473_373_855_7), epsilon = 1e-10);
        assert!(result.accept());
        assert_eq!(result.status(), TestStatus::Ok);
    }

    #[test]
    fn test_concentrated_sample_is_rejected() {
        let values = [0.45, 0.55, 0.5, 0.52, 0.48, 0.51, 0.49, 0.5, 0.47, 0.53];
        let result = run(&values, 0.05);
        let (_, q, df, _) = details(&result);

        assert_relative_eq!(q, 0.0936, epsilon = 1e-12);
        assert_eq!(df, 9);
        assert_relative_eq!(result.critical_values()[0], 2.700_389_499_980_358, epsilon = 1e-8);
        assert_relative_eq!(result.critical_values()[1], 19.022_767_802_211_12, epsilon = 1e-8);
        assert_relative_eq!(result.p_value(), 3.816_462_075_141_849e-8, max_relative = 1e-8);
        assert!(!result.accept());
    }

    #[test]
    fn test_s2_interval_inverts_q_bounds() {
        let values: Vec<f64> = (0..30).map(|i| ((i * 7) % 30) as f64 / 30.0 + 0.01).collect();
        let result = run(&values, 0.1);
        let (s2, q, df, interval) = details(&result);
        let bounds = result.critical_values();

        assert_relative_eq!(interval[0] * df as f64 * 12.0, bounds[0], epsilon = 1e-10);
        assert_relative_eq!(interval[1] * df as f64 * 12.0, bounds[1], epsilon = 1e-10);
        let in_interval = interval[0] <= s2 && s2 <= interval[1];
        let in_bounds = bounds[0] <= q && q <= bounds[1];
        assert_eq!(in_interval, in_bounds);
    }

    #[test]
    fn test_lower_bound_at_tiny_alpha() {
        // df = 2: χ²_{α/2} = −2 ln(1 − α/2), about α for small α.
        let alpha = 2e-13;
        let result = run(&[0.2, 0.5, 0.8], alpha);
        let lower = result.critical_values()[0];

        assert!(lower > 0.0);
        assert_relative_eq!(lower, -2.0 * (-alpha / 2.0).ln_1p(), max_relative = 1e-9);
    }

    #[test]
    fn test_single_value_is_undefined() {
        let result = run(&[0.3], 0.05);
        let (s2, q, df, interval) = details(&result);

        assert!(s2.is_nan());
        assert!(q.is_nan());
        assert!(interval[0].is_nan() && interval[1].is_nan());
        assert_eq!(df, 1);
        assert!(result.p_value().is_nan());
        assert!(!result.accept());
        assert_eq!(result.status(), TestStatus::Warning);
    }

    #[test]
    fn test_empty_sequence_is_undefined() {
        let result = run(&[], 0.05);
        assert!(result.statistic().is_nan());
        assert!(!result.accept());
    }

    #[test]
    fn test_invalid_alpha_raises() {
        assert_eq!(
            VarianceTest::new().run(&[0.2, 0.4], 1.5, &TestOptions::default()),
            Err(ConfigError::InvalidAlpha(1.5))
        );
    }
}
