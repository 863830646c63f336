//! Statistical tests of the Uniform[0, 1] hypothesis.
//!
//! This module provides:
//! - [`MeanTest`]: Z test on the sample mean
//! - [`VarianceTest`]: Chi-square test on the sample variance
//! - [`UniformityChiSquareTest`]: Chi-square goodness of fit over m intervals
//! - [`RandomnessTestEnum`]: Static dispatch over the three
//! - [`TestSuite`]: Run several tests over one sequence
//!
//! Degenerate input (tiny samples, values outside the support) produces
//! warnings on the result, never an error.

pub mod mean;
pub mod suite;
pub mod test_enum;
pub mod uniformity;
pub mod variance;

pub use mean::MeanTest;
pub use suite::{SuiteReport, TestSuite};
pub use test_enum::{RandomnessTestEnum, TestKind};
pub use uniformity::{select_bins, BinSelection, UniformityChiSquareTest};
pub use variance::VarianceTest;

/// Samples below this size are flagged as unreliable.
pub const MIN_RELIABLE_N: usize = 10;

/// Nominal support a test checks values against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Support {
    /// (0, 1)
    Open,
    /// [0, 1]
    Closed,
}

impl Support {
    fn contains(self, value: f64) -> bool {
        match self {
            Support::Open => value > 0.0 && value < 1.0,
            Support::Closed => (0.0..=1.0).contains(&value),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Support::Open => "(0, 1)",
            Support::Closed => "[0, 1]",
        }
    }
}

/// Warnings shared by every test: small n, values outside the support.
pub(crate) fn sample_warnings(sequence: &[f64], support: Support) -> Vec<String> {
    let mut warnings = Vec::new();
    let n = sequence.len();
    if n < MIN_RELIABLE_N {
        warnings.push(format!(
            "n={} < {}: sample too small, results are unreliable",
            n, MIN_RELIABLE_N
        ));
    }
    let outside = sequence.iter().filter(|&&v| !support.contains(v)).count();
    if outside > 0 {
        warnings.push(format!(
            "{} value(s) outside the nominal support {}",
            outside,
            support.label()
        ));
    }
    warnings
}
