//! Randomness test interface.

use crate::types::{ConfigError, TestOptions, TestResult};

/// A statistical test of the hypothesis that a sequence is an i.i.d.
/// Uniform[0, 1] sample.
///
/// Implementations are stateless, so one instance may run on several
/// sequences concurrently.
///
/// # Contract
///
/// - The input slice is only read.
/// - Numerically degenerate input (tiny n, values outside the support) never
///   fails: it yields a result with warnings and NaN where undefined.
/// - The only error is a structurally invalid configuration such as an alpha
///   outside (0, 1).
pub trait RandomnessTest: Send + Sync {
    /// Catalog key, e.g. `"mean"`.
    fn test_id(&self) -> &'static str;

    /// Run the test at significance level `alpha`.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidAlpha` when `alpha` is not finite or not strictly
    /// inside (0, 1).
    fn run(
        &self,
        sequence: &[f64],
        alpha: f64,
        options: &TestOptions,
    ) -> Result<TestResult, ConfigError>;
}

/// Check that `alpha` is a usable significance level.
///
/// # Examples
/// ```
/// use prng_core::traits::validate_alpha;
///
/// assert!(validate_alpha(0.05).is_ok());
/// assert!(validate_alpha(0.0).is_err());
/// assert!(validate_alpha(f64::NAN).is_err());
/// ```
pub fn validate_alpha(alpha: f64) -> Result<f64, ConfigError> {
    if alpha.is_finite() && alpha > 0.0 && alpha < 1.0 {
        Ok(alpha)
    } else {
        Err(ConfigError::InvalidAlpha(alpha))
    }
}
