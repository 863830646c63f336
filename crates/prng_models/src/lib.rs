//! # prng_models (L2: Business Logic)
//!
//! Digit-extraction generators, randomness tests, and the catalog that ties
//! them to names.
//!
//! This crate provides:
//! - Middle-square, constant multiplier and middle product generators with
//!   step-by-step traces (`generators`)
//! - Mean, variance and chi-square uniformity tests, and a suite runner
//!   (`randomness`)
//! - A name → factory catalog for both (`catalog`)
//! - Two-column CSV export and import of sequences (`export`)
//!
//! ## Design Principles
//!
//! - **Enum-based dispatch** (`DigitGenerator`, `RandomnessTestEnum`) instead
//!   of trait objects
//! - **Typed parameters** per generator variant instead of option bags
//! - **Pure computation**: generators and tests hold no state between calls
//!
//! ## Example
//!
//! ```
//! use prng_core::traits::DigitSequenceGenerator;
//! use prng_core::types::TestOptions;
//! use prng_models::catalog::AlgorithmCatalog;
//! use prng_models::generators::GeneratorParams;
//! use prng_models::randomness::TestSuite;
//!
//! let catalog = AlgorithmCatalog::standard();
//! let generator = catalog.create_generator("mid-square").unwrap();
//! let params = GeneratorParams::from_inputs(generator.kind(), Some(1234), None, None).unwrap();
//!
//! let (sequence, trace) = generator.generate(5, &params).unwrap();
//! assert_eq!(trace.steps()[0].to_string(), "Y0=(1234)^2=01522756   X1=5227   r1=0.5227");
//!
//! let report = TestSuite::all().run(&sequence, 0.05, &TestOptions::default()).unwrap();
//! assert_eq!(report.results.len(), 3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod catalog;
pub mod export;
pub mod generators;
pub mod randomness;
