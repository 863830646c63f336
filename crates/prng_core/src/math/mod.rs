//! Numerical building blocks for the randomness tests.
//!
//! This module provides:
//! - `special`: Log-gamma, regularised incomplete gamma, erfc
//! - `distributions`: Standard normal and chi-square CDF, survival and quantile
//! - `solvers`: Brent root finder used to invert the chi-square CDF

pub mod distributions;
pub mod solvers;
pub mod special;
