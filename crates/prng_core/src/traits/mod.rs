//! Core interfaces for generators and randomness tests.
//!
//! This module defines:
//! - `generator`: The [`DigitSequenceGenerator`] trait and its static
//!   [`GeneratorCapabilities`] metadata
//! - `randomness`: The [`RandomnessTest`] trait
//!
//! Concrete implementations live in `prng_models` and are dispatched through
//! enums (`DigitGenerator`, `RandomnessTestEnum`) rather than trait objects.

pub mod generator;
pub mod randomness;

pub use generator::{DigitSequenceGenerator, GeneratorCapabilities};
pub use randomness::{validate_alpha, RandomnessTest};
