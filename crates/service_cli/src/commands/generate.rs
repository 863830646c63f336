//! Generate command implementation
//!
//! Runs one generator and prints the sequence, optionally with its trace.
//! With `--output` the values go to a two-column CSV file instead of stdout.

use clap::Args;
use prng_models::catalog::AlgorithmCatalog;
use prng_models::export::export_sequence_csv;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use super::{generate_from_args, Generated, GeneratorArgs};
use crate::config::CliConfig;
use crate::render::{write_generation, GenerationView};
use crate::Result;

/// Arguments of `prng generate`
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub generator: GeneratorArgs,

    /// Write the sequence to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Build the display view for a generation, exporting first when requested.
pub(crate) fn present<'a>(
    generated: &'a Generated,
    args: &GeneratorArgs,
    output: Option<&PathBuf>,
    config: &CliConfig,
) -> Result<GenerationView<'a>> {
    let sequence = match output {
        Some(path) => {
            export_sequence_csv(path, &generated.sequence)?;
            None
        }
        None => Some(generated.sequence.values()),
    };

    let view = GenerationView {
        algorithm: generated.algorithm,
        params: &generated.params,
        n: generated.sequence.len(),
        sequence,
        trace: None,
        omitted_steps: 0,
    };
    Ok(if args.trace {
        view.with_trace(&generated.trace, config.trace_rows)
    } else {
        view
    })
}

/// Run the generate command
pub fn run<W: Write>(args: &GenerateArgs, config: &CliConfig, out: &mut W) -> Result<()> {
    let catalog = AlgorithmCatalog::standard();
    let generated = generate_from_args(&catalog, &args.generator, config.length)?;
    let view = present(&generated, &args.generator, args.output.as_ref(), config)?;

    write_generation(out, &view, config.format)?;
    info!(n = view.n, "Generation complete");
    Ok(())
}
