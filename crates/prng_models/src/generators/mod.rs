//! Digit-extraction pseudorandom generators.
//!
//! This module provides:
//! - [`MidSquare`]: `Y = X²`
//! - [`ConstantMultiplier`]: `Y = a · X`
//! - [`MiddleProduct`]: `Y = X_prev · X_curr`
//! - [`DigitGenerator`]: Static dispatch over the three
//! - `digits`: The shared centre-digit extraction kernel
//!
//! All generators are pure: the same parameters always reproduce the same
//! sequence and trace.

pub mod constant_multiplier;
pub mod digits;
pub mod generator_enum;
pub mod mid_square;
pub mod middle_product;

pub use constant_multiplier::{ConstantMultiplier, ConstantMultiplierParams};
pub use digits::{digit_count, DigitWindow, Extraction};
pub use generator_enum::{DigitGenerator, GeneratorKind, GeneratorParams};
pub use mid_square::{MidSquare, MidSquareParams};
pub use middle_product::{MiddleProduct, MiddleProductParams};
