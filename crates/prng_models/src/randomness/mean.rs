//! Mean test.
//!
//! Under H0 the mean of n Uniform[0, 1] draws has expectation 1/2 and
//! variance 1/(12n), so
//!
//! ```text
//! Z = √(12n) · (ū − 1/2)  ~  N(0, 1)
//! ```
//!
//! H0 is kept when |Z| ≤ z_{1−α/2}.

use prng_core::math::distributions::{norm_quantile, norm_sf};
use prng_core::traits::{validate_alpha, RandomnessTest};
use prng_core::types::{ConfigError, TestDetails, TestOptions, TestResult};
use tracing::debug;

use super::{sample_warnings, Support};

/// Z test on the sample mean.
///
/// # Examples
/// ```
/// use prng_core::traits::RandomnessTest;
/// use prng_core::types::TestOptions;
/// use prng_models::randomness::MeanTest;
///
/// let values = vec![0.5; 50];
/// let result = MeanTest::new().run(&values, 0.05, &TestOptions::default()).unwrap();
///
/// assert_eq!(result.statistic(), 0.0);
/// assert!(result.accept());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeanTest;

impl MeanTest {
    /// Create a new mean test.
    pub fn new() -> Self {
        Self
    }
}

impl RandomnessTest for MeanTest {
    fn test_id(&self) -> &'static str {
        "mean"
    }

    fn run(
        &self,
        sequence: &[f64],
        alpha: f64,
        _options: &TestOptions,
    ) -> Result<TestResult, ConfigError> {
        let alpha = validate_alpha(alpha)?;
        let n = sequence.len();
        let z_critical = norm_quantile(1.0 - alpha / 2.0);
        let warnings = sample_warnings(sequence, Support::Open);

        if n == 0 {
            let details = TestDetails::Mean {
                mean: f64::NAN,
                z: f64::NAN,
                z_critical,
            };
            return Ok(TestResult::builder(self.test_id(), alpha, n, details)
                .warnings(warnings)
                .p_value(f64::NAN)
                .decision(false, "Undefined: the sequence is empty")
                .build());
        }

        let mean = sequence.iter().sum::<f64>() / n as f64;
        let z = (12.0 * n as f64).sqrt() * (mean - 0.5);
        let p_value = 2.0 * norm_sf(z.abs());
        let accept = z.abs() <= z_critical;

        debug!(test = self.test_id(), n, alpha, z, p_value, accept, "ran mean test");

        let conclusion = if accept {
            "Do not reject H0: the sample mean is consistent with 1/2"
        } else {
            "Reject H0: the sample mean differs significantly from 1/2"
        };
        let details = TestDetails::Mean {
            mean,
            z,
            z_critical,
        };
        Ok(TestResult::builder(self.test_id(), alpha, n, details)
            .warnings(warnings)
            .p_value(p_value)
            .decision(accept, conclusion)
            .build())
    }
}
