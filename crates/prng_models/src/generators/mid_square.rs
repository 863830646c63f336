//! Von Neumann's middle-square method.
//!
//! ```text
//! Y_j     = X_j²
//! X_{j+1} = centre D digits of Y_j
//! r_{j+1} = X_{j+1} / 10^D
//! ```
//!
//! D is the digit count of the seed. A zero state is absorbing.

use prng_core::traits::{DigitSequenceGenerator, GeneratorCapabilities};
use prng_core::types::{ConfigError, Sequence, StepOperation, Trace, TraceStep};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::digits::{ensure_length, require_width, DigitWindow};

/// Middle-square parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MidSquareParams {
    /// Initial state X0; its digit count fixes D.
    pub seed: i64,
}

impl MidSquareParams {
    /// Create parameters from a seed.
    pub fn new(seed: i64) -> Self {
        Self { seed }
    }
}

/// Middle-square generator.
///
/// # Examples
/// ```
/// use prng_core::traits::DigitSequenceGenerator;
/// use prng_models::generators::{MidSquare, MidSquareParams};
///
/// let (seq, trace) = MidSquare::new().generate(2, &MidSquareParams::new(1234)).unwrap();
///
/// assert_eq!(seq.values(), &[0.5227, 0.3215]);
/// assert_eq!(
///     trace.steps()[0].to_string(),
///     "Y0=(1234)^2=01522756   X1=5227   r1=0.5227"
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MidSquare;

impl MidSquare {
    /// One seed, no constant.
    pub const CAPABILITIES: GeneratorCapabilities = GeneratorCapabilities::new(1, false);

    /// Create a new middle-square generator.
    pub fn new() -> Self {
        Self
    }
}

impl DigitSequenceGenerator for MidSquare {
    type Params = MidSquareParams;

    fn name(&self) -> &'static str {
        "mid-square"
    }

    fn capabilities(&self) -> GeneratorCapabilities {
        Self::CAPABILITIES
    }

    fn generate(&self, n: usize, params: &Self::Params) -> Result<(Sequence, Trace), ConfigError> {
        ensure_length(n)?;
        let window = DigitWindow::new(require_width("seed", params.seed)?);

        let mut values = Vec::with_capacity(n);
        let mut trace = Trace::with_capacity(n);
        let mut x = i128::from(params.seed);

        for step in 0..n {
            let extraction = window.extract(x * x);
            trace.push(TraceStep {
                step,
                label: step + 1,
                operation: StepOperation::Square { x: window.pad(x) },
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regression_fixture_1234() {
        let (seq, trace) = MidSquare::new()
            .generate(1, &MidSquareParams::new(1234))
            .unwrap();
        let step = &trace.steps()[0];

        assert_eq!(step.product, "01522756");
        assert_eq!(step.extracted, "5227");
        assert_eq!(step.label, 1);
        assert_eq!(seq[0], 0.5227);
    }

    #[test]
    fn test_known_sequence_1234() {
        // 5227² = 27321529 -> 3215; 3215² = 10336225 -> 3362
        let (seq, trace) = MidSquare::new()
            .generate(3, &MidSquareParams::new(1234))
            .unwrap();
        assert_eq!(seq.values(), &[0.5227, 0.3215, 0.3362]);
        assert_eq!(
            trace.lines(),
            vec![
                "Y0=(1234)^2=01522756   X1=5227   r1=0.5227",
                "Y1=(5227)^2=27321529   X2=3215   r2=0.3215",
                "Y2=(3215)^2=10336225   X3=3362   r3=0.3362",
            ]
        );
    }

    #[test]
    fn test_zero_state_is_absorbing() {
        // 1000² = 1000000 -> "01000000" -> "0000"
        let (seq, _) = MidSquare::new()
            .generate(5, &MidSquareParams::new(1000))
            .unwrap();
        assert!(seq.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_leading_zeros_shown_in_operand() {
        // 2100² = 4410000 -> "04410000" -> "4100"; 4100² = 16810000 -> "8100"
        // 8100² = 65610000 -> "6100"; 6100² = 37210000 -> "2100"
        let (_, trace) = MidSquare::new()
            .generate(2, &MidSquareParams::new(2100))
            .unwrap();
        assert_eq!(trace.steps()[0].extracted, "4100");
        assert_eq!(trace.steps()[1].operation, StepOperation::Square { x: "4100".into() });
    }

    #[test]
    fn test_negative_seed_uses_magnitude() {
        let gen = MidSquare::new();
        let (positive, _) = gen.generate(4, &MidSquareParams::new(1234)).unwrap();
        let (negative, trace) = gen.generate(4, &MidSquareParams::new(-1234)).unwrap();
        assert_eq!(positive, negative);
        assert_eq!(trace.steps()[0].to_string(), "Y0=(-1234)^2=01522756   X1=5227   r1=0.5227");
    }

    #[test]
    fn test_rejects_short_seed_and_zero_length() {
        let gen = MidSquare::new();
        assert!(matches!(
            gen.generate(5, &MidSquareParams::new(123)),
            Err(ConfigError::TooFewDigits { digits: 3, .. })
        ));
        assert_eq!(
            gen.generate(0, &MidSquareParams::new(1234)),
            Err(ConfigError::ZeroLength)
        );
    }

    #[test]
    fn test_capabilities() {
        let caps = MidSquare::new().capabilities();
        assert_eq!(caps.required_seeds, 1);
        assert!(!caps.requires_constant);
    }
}
