//! Static dispatch over the randomness tests.

use prng_core::traits::RandomnessTest;
use prng_core::types::{ConfigError, TestOptions, TestResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::mean::MeanTest;
use super::uniformity::UniformityChiSquareTest;
use super::variance::VarianceTest;

/// Randomness test identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestKind {
    /// Mean (Z) test
    #[serde(rename = "mean")]
    Mean,
    /// Variance (chi-square) test
    #[serde(rename = "variance")]
    Variance,
    /// Chi-square goodness of fit
    #[serde(rename = "uniformity-chi2")]
    Uniformity,
}

impl TestKind {
    /// All variants in catalog order.
    pub const ALL: [TestKind; 3] = [TestKind::Mean, TestKind::Variance, TestKind::Uniformity];

    /// Catalog key.
    pub fn name(&self) -> &'static str {
        match self {
            TestKind::Mean => "mean",
            TestKind::Variance => "variance",
            TestKind::Uniformity => "uniformity-chi2",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            TestKind::Mean => "Mean test (Z)",
            TestKind::Variance => "Variance test (chi-square)",
            TestKind::Uniformity => "Uniformity test (chi-square goodness of fit)",
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TestKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TestKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownTest(s.to_string()))
    }
}

/// Static dispatch enum for randomness tests.
///
/// # Examples
/// ```
/// use prng_core::traits::RandomnessTest;
/// use prng_core::types::TestOptions;
/// use prng_models::randomness::{RandomnessTestEnum, TestKind};
///
/// let test = RandomnessTestEnum::new(TestKind::Variance);
/// assert_eq!(test.test_id(), "variance");
///
/// let result = test.run(&[0.1, 0.9, 0.4, 0.6], 0.05, &TestOptions::default()).unwrap();
/// assert_eq!(result.n(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RandomnessTestEnum {
    /// Mean test
    Mean(MeanTest),
    /// Variance test
    Variance(VarianceTest),
    /// Uniformity chi-square test
    Uniformity(UniformityChiSquareTest),
}

impl RandomnessTestEnum {
    /// Fresh test of the given kind.
    pub fn new(kind: TestKind) -> Self {
        match kind {
            TestKind::Mean => RandomnessTestEnum::Mean(MeanTest::new()),
            TestKind::Variance => RandomnessTestEnum::Variance(VarianceTest::new()),
            TestKind::Uniformity => RandomnessTestEnum::Uniformity(UniformityChiSquareTest::new()),
        }
    }

    /// Test identifier.
    pub fn kind(&self) -> TestKind {
        match self {
            RandomnessTestEnum::Mean(_) => TestKind::Mean,
            RandomnessTestEnum::Variance(_) => TestKind::Variance,
            RandomnessTestEnum::Uniformity(_) => TestKind::Uniformity,
        }
    }
}

impl RandomnessTest for RandomnessTestEnum {
    fn test_id(&self) -> &'static str {
        self.kind().name()
    }

    fn run(
        &self,
        sequence: &[f64],
        alpha: f64,
        options: &TestOptions,
    ) -> Result<TestResult, ConfigError> {
        match self {
            RandomnessTestEnum::Mean(test) => test.run(sequence, alpha, options),
            RandomnessTestEnum::Variance(test) => test.run(sequence, alpha, options),
            RandomnessTestEnum::Uniformity(test) => test.run(sequence, alpha, options),
        }
    }
}
