//! Digit-extraction generator interface.

use crate::types::{ConfigError, Sequence, Trace};
use serde::Serialize;

/// Inputs a generator variant needs before it can run.
///
/// Callers consult this before `generate` to know which values to collect.
///
/// # Examples
/// ```
/// use prng_core::traits::GeneratorCapabilities;
///
/// const TWO_SEEDS: GeneratorCapabilities = GeneratorCapabilities::new(2, false);
/// assert_eq!(TWO_SEEDS.required_seeds, 2);
/// assert!(!TWO_SEEDS.requires_constant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GeneratorCapabilities {
    /// Number of seeds (1 or 2).
    pub required_seeds: u8,
    /// Whether a multiplier constant is needed.
    pub requires_constant: bool,
}

impl GeneratorCapabilities {
    /// Create capability metadata.
    pub const fn new(required_seeds: u8, requires_constant: bool) -> Self {
        Self {
            required_seeds,
            requires_constant,
        }
    }
}

/// A deterministic generator that derives each value from the decimal digits
/// of an arithmetic combination of its previous state.
///
/// # Contract
///
/// - `generate(n, params)` returns exactly `n` values and `n` trace steps, or
///   fails before computing anything.
/// - Identical `(n, params)` always give identical output.
/// - The trace is built inside one call and handed back by value, so an
///   instance can be shared freely.
///
/// # Examples
/// ```
/// use prng_core::traits::{DigitSequenceGenerator, GeneratorCapabilities};
/// use prng_core::types::{ConfigError, Sequence, Trace};
///
/// struct Constant;
///
/// impl DigitSequenceGenerator for Constant {
///     type Params = f64;
///
///     fn name(&self) -> &'static str {
///         "constant"
///     }
///
///     fn capabilities(&self) -> GeneratorCapabilities {
///         GeneratorCapabilities::new(1, false)
///     }
///
///     fn generate(&self, n: usize, value: &f64) -> Result<(Sequence, Trace), ConfigError> {
///         if n == 0 {
///             return Err(ConfigError::ZeroLength);
///         }
///         Ok((vec![*value; n].into(), Trace::default()))
///     }
/// }
///
/// let (seq, _) = Constant.generate(3, &0.5).unwrap();
/// assert_eq!(seq.values(), &[0.5, 0.5, 0.5]);
/// assert!(Constant.generate(0, &0.5).is_err());
/// ```
pub trait DigitSequenceGenerator {
    /// Typed inputs for one run (seeds, constant).
    type Params;

    /// Catalog key, e.g. `"mid-square"`.
    fn name(&self) -> &'static str;

    /// Static input requirements.
    fn capabilities(&self) -> GeneratorCapabilities;

    /// Produce `n` values and their trace.
    ///
    /// # Errors
    ///
    /// `ConfigError` when `n == 0` or the parameters are structurally invalid
    /// (too few digits, mismatched seed widths, wrong variant).
    fn generate(&self, n: usize, params: &Self::Params) -> Result<(Sequence, Trace), ConfigError>;
}
