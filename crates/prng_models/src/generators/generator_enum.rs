//! Static dispatch over the digit-extraction generators.
//!
//! [`DigitGenerator`] wraps each concrete generator and [`GeneratorParams`]
//! carries the matching typed inputs, so a caller holding a catalog name can
//! run any variant without trait objects.
//!
//! ## Example
//!
//! ```
//! use prng_core::traits::DigitSequenceGenerator;
//! use prng_models::generators::{DigitGenerator, GeneratorKind, GeneratorParams};
//!
//! let kind: GeneratorKind = "middle-product".parse().unwrap();
//! let params = GeneratorParams::from_inputs(kind, Some(1234), Some(5678), None).unwrap();
//! let (seq, trace) = DigitGenerator::new(kind).generate(10, &params).unwrap();
//!
//! assert_eq!(seq.len(), 10);
//! assert_eq!(trace.steps()[0].label, 2);
//! ```

use prng_core::traits::{DigitSequenceGenerator, GeneratorCapabilities};
use prng_core::types::{ConfigError, Sequence, Trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::constant_multiplier::{ConstantMultiplier, ConstantMultiplierParams};
use super::mid_square::{MidSquare, MidSquareParams};
use super::middle_product::{MiddleProduct, MiddleProductParams};

/// Generator variant identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorKind {
    /// Middle-square method
    MidSquare,
    /// Constant multiplier method
    ConstantMultiplier,
    /// Middle product method
    MiddleProduct,
}

impl GeneratorKind {
    /// All variants in catalog order.
    pub const ALL: [GeneratorKind; 3] = [
        GeneratorKind::MidSquare,
        GeneratorKind::ConstantMultiplier,
        GeneratorKind::MiddleProduct,
    ];

    /// Catalog key.
    pub fn name(&self) -> &'static str {
        match self {
            GeneratorKind::MidSquare => "mid-square",
            GeneratorKind::ConstantMultiplier => "constant-multiplier",
            GeneratorKind::MiddleProduct => "middle-product",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GeneratorKind::MidSquare => "Middle-square method",
            GeneratorKind::ConstantMultiplier => "Constant multiplier method",
            GeneratorKind::MiddleProduct => "Middle product method",
        }
    }

    /// Static input requirements.
    pub fn capabilities(&self) -> GeneratorCapabilities {
        match self {
            GeneratorKind::MidSquare => MidSquare::CAPABILITIES,
            GeneratorKind::ConstantMultiplier => ConstantMultiplier::CAPABILITIES,
            GeneratorKind::MiddleProduct => MiddleProduct::CAPABILITIES,
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeneratorKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownGenerator(s.to_string()))
    }
}

/// Typed inputs for one generator run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "generator", rename_all = "kebab-case")]
pub enum GeneratorParams {
    /// Middle-square inputs
    MidSquare(MidSquareParams),
    /// Constant multiplier inputs
    ConstantMultiplier(ConstantMultiplierParams),
    /// Middle product inputs
    MiddleProduct(MiddleProductParams),
}

impl GeneratorParams {
    /// Build typed parameters from loosely collected inputs.
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingSeed` - the seed, or the second seed of a
    ///   two-seed variant, is absent
    /// * `ConfigError::MissingConstant` - the variant needs a constant
    /// * `ConfigError::UnusedInput` - a second seed or constant was given to
    ///   a variant that does not take it
    pub fn from_inputs(
        kind: GeneratorKind,
        seed: Option<i64>,
        seed2: Option<i64>,
        constant: Option<i64>,
    ) -> Result<Self, ConfigError> {
        let seed = seed.ok_or_else(|| ConfigError::MissingSeed {
            generator: kind.display_name().to_string(),
            input: "a seed".to_string(),
        })?;

        let caps = kind.capabilities();
        let unused = if seed2.is_some() && caps.required_seeds < 2 {
            Some("a second seed")
        } else if constant.is_some() && !caps.requires_constant {
            Some("a multiplier constant")
        } else {
            None
        };
        if let Some(input) = unused {
            return Err(ConfigError::UnusedInput {
                generator: kind.display_name().to_string(),
                input: input.to_string(),
            });
        }

        match kind {
            GeneratorKind::MidSquare => Ok(GeneratorParams::MidSquare(MidSquareParams::new(seed))),
            GeneratorKind::ConstantMultiplier => {
                let constant = constant.ok_or_else(|| ConfigError::MissingConstant {
                    generator: kind.display_name().to_string(),
                })?;
                Ok(GeneratorParams::ConstantMultiplier(
                    ConstantMultiplierParams::new(seed, constant),
                ))
            }
            GeneratorKind::MiddleProduct => {
                let seed2 = seed2.ok_or_else(|| ConfigError::MissingSeed {
                    generator: kind.display_name().to_string(),
                    input: "a second seed".to_string(),
                })?;
                Ok(GeneratorParams::MiddleProduct(MiddleProductParams::new(
                    seed, seed2,
                )))
            }
        }
    }

    /// Variant these parameters belong to.
    pub fn kind(&self) -> GeneratorKind {
        match self {
            GeneratorParams::MidSquare(_) => GeneratorKind::MidSquare,
            GeneratorParams::ConstantMultiplier(_) => GeneratorKind::ConstantMultiplier,
            GeneratorParams::MiddleProduct(_) => GeneratorKind::MiddleProduct,
        }
    }
}

/// Static dispatch enum for digit-extraction generators.
///
/// Use this instead of `Box<dyn DigitSequenceGenerator>`; the associated
/// `Params` type differs per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigitGenerator {
    /// Middle-square method
    MidSquare(MidSquare),
    /// Constant multiplier method
    ConstantMultiplier(ConstantMultiplier),
    /// Middle product method
    MiddleProduct(MiddleProduct),
}

impl DigitGenerator {
    /// Fresh generator of the given variant.
    pub fn new(kind: GeneratorKind) -> Self {
        match kind {
            GeneratorKind::MidSquare => Self::mid_square(),
            GeneratorKind::ConstantMultiplier => Self::constant_multiplier(),
            GeneratorKind::MiddleProduct => Self::middle_product(),
        }
    }

    /// Create a middle-square generator.
    pub fn mid_square() -> Self {
        DigitGenerator::MidSquare(MidSquare::new())
    }

    /// Create a constant multiplier generator.
    pub fn constant_multiplier() -> Self {
        DigitGenerator::ConstantMultiplier(ConstantMultiplier::new())
    }

    /// Create a middle product generator.
    pub fn middle_product() -> Self {
        DigitGenerator::MiddleProduct(MiddleProduct::new())
    }

    /// Variant identifier.
    pub fn kind(&self) -> GeneratorKind {
        match self {
            DigitGenerator::MidSquare(_) => GeneratorKind::MidSquare,
            DigitGenerator::ConstantMultiplier(_) => GeneratorKind::ConstantMultiplier,
            DigitGenerator::MiddleProduct(_) => GeneratorKind::MiddleProduct,
        }
    }
}

impl DigitSequenceGenerator for DigitGenerator {
    type Params = GeneratorParams;

    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn capabilities(&self) -> GeneratorCapabilities {
        self.kind().capabilities()
    }

    fn generate(&self, n: usize, params: &Self::Params) -> Result<(Sequence, Trace), ConfigError> {
        match (self, params) {
            (DigitGenerator::MidSquare(g), GeneratorParams::MidSquare(p)) => g.generate(n, p),
            (DigitGenerator::ConstantMultiplier(g), GeneratorParams::ConstantMultiplier(p)) => {
                g.generate(n, p)
            }
            (DigitGenerator::MiddleProduct(g), GeneratorParams::MiddleProduct(p)) => {
                g.generate(n, p)
            }
            (generator, params) => Err(ConfigError::ParamsMismatch {
                generator: generator.name().to_string(),
                params: params.kind().name().to_string(),
            }),
        }
    }
}
