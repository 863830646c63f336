//! Middle product method.
//!
//! ```text
//! Y_j     = X_j · X_{j+1}
//! X_{j+2} = centre D digits of |Y_j|
//! r_{j+2} = X_{j+2} / 10^D
//! ```
//!
//! Both seeds must share the digit count D. Outputs are labelled from X2.

use prng_core::traits::{DigitSequenceGenerator, GeneratorCapabilities};
use prng_core::types::{ConfigError, Sequence, StepOperation, Trace, TraceStep};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::digits::{digit_count, ensure_length, require_width, DigitWindow};

/// Middle product parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiddleProductParams {
    /// First state X0.
    pub seed: i64,
    /// Second state X1, same digit count as `seed`.
    pub seed2: i64,
}

impl MiddleProductParams {
    /// Create parameters from the two seeds.
    pub fn new(seed: i64, seed2: i64) -> Self {
        Self { seed, seed2 }
    }
}

/// Middle product generator.
///
/// # Examples
/// ```
/// use prng_core::traits::DigitSequenceGenerator;
/// use prng_models::generators::{MiddleProduct, MiddleProductParams};
///
/// let params = MiddleProductParams::new(1234, 5678);
/// let (seq, trace) = MiddleProduct::new().generate(2, &params).unwrap();
///
/// assert_eq!(seq.values(), &[0.0066, 0.7474]);
/// assert_eq!(
///     trace.steps()[0].to_string(),
///     "Y0=(1234)*(5678)=07006652   X2=0066   r2=0.0066"
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MiddleProduct;

impl MiddleProduct {
    /// Two seeds, no constant.
    pub const CAPABILITIES: GeneratorCapabilities = GeneratorCapabilities::new(2, false);

    /// Create a new middle product generator.
    pub fn new() -> Self {
        Self
    }
}

impl DigitSequenceGenerator for MiddleProduct {
    type Params = MiddleProductParams;

    fn name(&self) -> &'static str {
        "middle-product"
    }

    fn capabilities(&self) -> GeneratorCapabilities {
        Self::CAPABILITIES
    }

    fn generate(&self, n: usize, params: &Self::Params) -> Result<(Sequence, Trace), ConfigError> {
        ensure_length(n)?;
        let (first, second) = (digit_count(params.seed), digit_count(params.seed2));
        if first != second {
            return Err(ConfigError::DigitMismatch { first, second });
        }
        let window = DigitWindow::new(require_width("seed", params.seed)?);
        require_width("second seed", params.seed2)?;

        let mut values = Vec::with_capacity(n);
        let mut trace = Trace::with_capacity(n);
        let mut prev = i128::from(params.seed);
        let mut curr = i128::from(params.seed2);

        for step in 0..n {
            let extraction = window.extract(prev * curr);
            trace.push(TraceStep {
                step,
                label: step + 2,
                operation: StepOperation::MiddleProduct {
                    prev: window.pad(prev),
                    curr: window.pad(curr),
                },
                product: extraction.product,
                extracted: extraction.digits,
                value: extraction.value,
            });
            values.push(extraction.value);
            prev = curr;
            curr = extraction.state;
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
