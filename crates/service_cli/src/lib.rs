//! # service_cli (S: Service Layer)
//!
//! Command-line front end for the digit-extraction generators and the
//! randomness tests.
//!
//! # Commands
//!
//! - `prng list` - Show registered generators and tests
//! - `prng generate --algorithm <name> --seed <s>` - Generate a sequence
//! - `prng test --input <csv>` - Test a sequence read from CSV
//! - `prng run --algorithm <name> --seed <s>` - Generate and test in one step
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate only orchestrates:
//! configuration layering, argument parsing and rendering. All computation
//! lives in `prng_models` and `prng_core`.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;

pub use error::{CliError, Result};

/// Crate version, reported at startup.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
