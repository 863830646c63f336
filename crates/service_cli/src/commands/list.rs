//! List command implementation
//!
//! Shows every registered generator with its required inputs, and every
//! randomness test.

use prng_models::catalog::AlgorithmCatalog;
use std::io::Write;

use crate::config::CliConfig;
use crate::render::write_listing;
use crate::Result;

/// Run the list command
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    write_listing(out, &AlgorithmCatalog::standard(), config.format)
}
