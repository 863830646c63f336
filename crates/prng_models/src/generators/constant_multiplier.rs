//! Constant multiplier method.
//!
//! ```text
//! Y_j     = a · X_j
//! X_{j+1} = centre D digits of |Y_j|
//! r_{j+1} = X_{j+1} / 10^D
//! ```
//!
//! D is the digit count of the constant `a`. The seed may have any width; it
//! is padded to D only for display.

use prng_core::traits::{DigitSequenceGenerator, GeneratorCapabilities};
use prng_core::types::{ConfigError, Sequence, StepOperation, Trace, TraceStep};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::digits::{ensure_length, require_width, DigitWindow};

/// Constant multiplier parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantMultiplierParams {
    /// Initial state X0.
    pub seed: i64,
    /// Multiplier `a`; its digit count fixes D.
    pub constant: i64,
}

impl ConstantMultiplierParams {
    /// Create parameters from a seed and a multiplier.
    pub fn new(seed: i64, constant: i64) -> Self {
        Self { seed, constant }
    }
}

/// Constant multiplier generator.
///
/// # Examples
/// ```
/// use prng_core::traits::DigitSequenceGenerator;
/// use prng_models::generators::{ConstantMultiplier, ConstantMultiplierParams};
///
/// let params = ConstantMultiplierParams::new(9876, 5167);
/// let (seq, trace) = ConstantMultiplier::new().generate(2, &params).unwrap();
///
/// assert_eq!(seq.values(), &[0.0292, 0.5087]);
/// assert_eq!(
///     trace.steps()[1].to_string(),
///     "Y1=(5167)*(0292)=01508764   X2=5087   r2=0.5087"
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConstantMultiplier;

impl ConstantMultiplier {
    /// One seed and a constant.
    pub const CAPABILITIES: GeneratorCapabilities = GeneratorCapabilities::new(1, true);

    /// Create a new constant multiplier generator.
    pub fn new() -> Self {
        Self
    }
}

impl DigitSequenceGenerator for ConstantMultiplier {
    type Params = ConstantMultiplierParams;

    fn name(&self) -> &'static str {
        "constant-multiplier"
    }

    fn capabilities(&self) -> GeneratorCapabilities {
        Self::CAPABILITIES
    }

    fn generate(&self, n: usize, params: &Self::Params) -> Result<(Sequence, Trace), ConfigError> {
        ensure_length(n)?;
        let window = DigitWindow::new(require_width("constant", params.constant)?);
        let constant = i128::from(params.constant);
        let constant_label = params.constant.to_string();

        let mut values = Vec::with_capacity(n);
        let mut trace = Trace::with_capacity(n);
        let mut x = i128::from(params.seed);

        for step in 0..n {
            let extraction = window.extract(constant * x);
            trace.push(TraceStep {
                step,
                label: step + 1,
                operation: StepOperation::ScaledProduct {
                    constant: constant_label.clone(),
                    x: window.pad(x),
                },
                product: extraction.product,
                extracted: extraction.digits,
                value: extraction.value,
            });
            values.push(extraction.value);
            x = extraction.state;
        }

        debug!(
            generator = self.name(),
            n,
            digits = window.width(),
            "generated sequence"
        );
        Ok((Sequence::new(values), trace))
    }
}
