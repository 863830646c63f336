//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Argument groups shared
//! by several commands live here.

pub mod generate;
pub mod list;
pub mod run;
pub mod test;

use clap::Args;
use prng_core::traits::DigitSequenceGenerator;
use prng_core::types::{Sequence, Trace};
use prng_models::catalog::AlgorithmCatalog;
use prng_models::generators::GeneratorParams;
use prng_models::randomness::TestSuite;
use tracing::info;

use crate::Result;

/// Generator selection and inputs
#[derive(Args, Debug, Clone, Default)]
pub struct GeneratorArgs {
    /// Generator name (see `prng list`)
    #[arg(short, long, default_value = "mid-square")]
    pub algorithm: String,

    /// Number of values to generate
    #[arg(short = 'n', long)]
    pub length: Option<usize>,

    /// Seed X0 (more than 3 digits)
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Second seed X1 (middle product only, same digit count as the seed)
    #[arg(long, allow_negative_numbers = true)]
    pub seed2: Option<i64>,

    /// Multiplier constant a (constant multiplier only)
    #[arg(long, allow_negative_numbers = true)]
    pub constant: Option<i64>,

    /// Show the step-by-step trace
    #[arg(short, long)]
    pub trace: bool,

    /// Trace steps to show (0 shows all)
    #[arg(long)]
    pub trace_rows: Option<usize>,
}

/// Randomness test selection
#[derive(Args, Debug, Clone, Default)]
pub struct TestSelection {
    /// Comma-separated test names; all tests when omitted
    #[arg(long, value_delimiter = ',')]
    pub tests: Vec<String>,

    /// Significance level, strictly inside (0, 1)
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Number of equiprobable intervals for the uniformity test
    #[arg(long)]
    pub bins: Option<usize>,
}

/// Output of one generation run
#[derive(Debug, Clone)]
pub struct Generated {
    /// Catalog name of the generator used
    pub algorithm: &'static str,
    /// Typed inputs built from the arguments
    pub params: GeneratorParams,
    /// Generated values
    pub sequence: Sequence,
    /// One step per value
    pub trace: Trace,
}

/// Resolve the generator by name and run it for `length` values.
pub fn generate_from_args(
    catalog: &AlgorithmCatalog,
    args: &GeneratorArgs,
    length: usize,
) -> Result<Generated> {
    let generator = catalog.create_generator(&args.algorithm)?;
    let kind = generator.kind();
    let params = GeneratorParams::from_inputs(kind, args.seed, args.seed2, args.constant)?;

    info!(generator = kind.name(), n = length, "Generating sequence");
    let (sequence, trace) = generator.generate(length, &params)?;

    Ok(Generated {
        algorithm: kind.name(),
        params,
        sequence,
        trace,
    })
}

/// Build a suite from test names, or every catalog test when `names` is empty.
pub fn build_suite(catalog: &AlgorithmCatalog, names: &[String]) -> Result<TestSuite> {
    if names.is_empty() {
        let all = catalog
            .test_names()
            .map(|name| catalog.create_test(name))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        return Ok(TestSuite::new(all));
    }
    let tests = names
        .iter()
        .map(|name| catalog.create_test(name.trim()))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(TestSuite::new(tests))
}
