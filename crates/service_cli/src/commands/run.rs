//! Run command implementation
//!
//! Generates a sequence and tests it in one step.

use clap::Args;
use prng_models::catalog::AlgorithmCatalog;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use super::generate::present;
use super::{build_suite, generate_from_args, GeneratorArgs, TestSelection};
use crate::config::CliConfig;
use crate::render::write_run;
use crate::Result;

/// Arguments of `prng run`
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub generator: GeneratorArgs,

    #[command(flatten)]
    pub selection: TestSelection,

    /// Also write the sequence to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the generated values as well as the report
    #[arg(long)]
    pub show_values: bool,
}

/// Run the run command
pub fn run<W: Write>(args: &RunArgs, config: &CliConfig, out: &mut W) -> Result<()> {
    let catalog = AlgorithmCatalog::standard();
    // Resolve tests before generating so a bad name fails fast.
    let suite = build_suite(&catalog, &args.selection.tests)?;
    let generated = generate_from_args(&catalog, &args.generator, config.length)?;

    let mut view = present(&generated, &args.generator, args.output.as_ref(), config)?;
    if !args.show_values {
        view.sequence = None;
    }

    let report = suite.run_parallel(&generated.sequence, config.alpha, &config.test_options())?;
    info!(
        accepted = report.all_accepted(),
        warnings = report.warnings.len(),
        "Run complete"
    );

    write_run(out, &view, &report, config.format)
}
