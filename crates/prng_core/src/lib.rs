//! # prng_core: Foundation for Digit-Extraction PRNG Analysis
//!
//! ## Layer 1 (Foundation) Role
//!
//! prng_core is the bottom layer of the workspace, providing:
//! - Error types: `ConfigError`, `SolverError` (`types::error`)
//! - Sequence and trace containers: `Sequence`, `Trace`, `TraceStep` (`types`)
//! - Structured test verdicts: `TestResult`, `TestDetails` (`types::result`)
//! - Special functions and distributions: log-gamma, incomplete gamma,
//!   normal and chi-square CDF/quantiles (`math`)
//! - Root finding for quantile inversion (`math::solvers`)
//! - The generator and randomness-test interfaces (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other prng_* crates, with minimal external dependencies:
//! - num-traits: Generic floating-point bounds for the root finder
//! - thiserror: Error derives
//! - serde: Serialisation of sequences, traces and results
//!
//! ## Usage Examples
//!
//! ```rust
//! use prng_core::math::distributions::{chi2_quantile, norm_quantile};
//! use prng_core::types::Sequence;
//!
//! let z = norm_quantile(0.975_f64);
//! assert!((z - 1.959_963_984_540_054).abs() < 1e-9);
//!
//! let crit = chi2_quantile(0.95, 9.0);
//! assert!((crit - 16.918_977_604_620_45).abs() < 1e-6);
//!
//! let seq = Sequence::from(vec![0.25, 0.5, 0.75]);
//! assert_eq!(seq.len(), 3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
