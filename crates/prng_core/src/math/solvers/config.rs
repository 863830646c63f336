//! Solver configuration types.

use num_traits::Float;

/// Configuration for the bracketing root finder.
///
/// # Example
///
/// ```
/// use prng_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance <= 1e-12);
///
/// let coarse = SolverConfig::new(1e-6, 40);
/// assert_eq!(coarse.max_iterations, 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Stop once `|f(x)|` or the half-width of the bracket drops below this.
    pub tolerance: T,

    /// Give up with `SolverError::MaxIterationsExceeded` after this many steps.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Quantile inversion defaults: tolerance 1e-12, 200 iterations.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-12).unwrap_or_else(T::epsilon),
            max_iterations: 200,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }
}
