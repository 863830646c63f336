//! Test command implementation
//!
//! Reads a sequence from CSV and runs the selected randomness tests over it.

use clap::Args;
use prng_models::catalog::AlgorithmCatalog;
use prng_models::export::import_sequence_csv;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use super::{build_suite, TestSelection};
use crate::config::CliConfig;
use crate::render::write_report;
use crate::Result;

/// Arguments of `prng test`
#[derive(Args, Debug, Clone)]
pub struct TestArgs {
    /// CSV file written by `prng generate --output`
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub selection: TestSelection,
}

/// Run the test command
pub fn run<W: Write>(args: &TestArgs, config: &CliConfig, out: &mut W) -> Result<()> {
    let suite = build_suite(&AlgorithmCatalog::standard(), &args.selection.tests)?;
    let sequence = import_sequence_csv(&args.input)?;

    info!(n = sequence.len(), tests = suite.tests().len(), "Running randomness tests");
    let report = suite.run_parallel(&sequence, config.alpha, &config.test_options())?;

    write_report(out, &report, config.format)
}
