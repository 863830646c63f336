//! Error types for structured error handling.
//!
//! This module provides:
//! - `ConfigError`: Structural misconfiguration of a generator, test or catalog lookup
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Result alias for operations that fail on structural misconfiguration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors.
///
/// Raised before any computation starts; nothing partial is ever returned
/// alongside one of these. Degenerate but well-formed inputs (tiny samples,
/// out-of-range values) are not errors: they surface as warnings on the
/// test result instead.
///
/// # Examples
/// ```
/// use prng_core::types::ConfigError;
///
/// let err = ConfigError::DigitMismatch { first: 4, second: 2 };
/// assert_eq!(
///     format!("{}", err),
///     "Both seeds must have the same digit count: got D1=4, D2=2"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Requested sequence length was zero.
    #[error("Sequence length must be positive")]
    ZeroLength,

    /// A required seed was not supplied.
    #[error("{generator} requires {input}")]
    MissingSeed {
        /// Generator display name
        generator: String,
        /// Which seed was missing
        input: String,
    },

    /// A required multiplier constant was not supplied.
    #[error("{generator} requires a multiplier constant with more than 3 digits")]
    MissingConstant {
        /// Generator display name
        generator: String,
    },

    /// An input was supplied to a generator that does not take it.
    #[error("{generator} does not take {input}")]
    UnusedInput {
        /// Generator display name
        generator: String,
        /// Which input was supplied
        input: String,
    },

    /// A seed or constant has too few decimal digits.
    #[error("The {input} must have more than 3 digits: {value} has D={digits}")]
    TooFewDigits {
        /// Which input was rejected ("seed", "second seed", "constant")
        input: String,
        /// The rejected value
        value: i64,
        /// Its decimal digit count
        digits: usize,
    },

    /// The two seeds of a two-seed generator differ in digit count.
    #[error("Both seeds must have the same digit count: got D1={first}, D2={second}")]
    DigitMismatch {
        /// Digit count of the first seed
        first: usize,
        /// Digit count of the second seed
        second: usize,
    },

    /// Parameters were built for a different generator variant.
    #[error("{generator} cannot run with {params} parameters")]
    ParamsMismatch {
        /// Generator receiving the parameters
        generator: String,
        /// Variant the parameters belong to
        params: String,
    },

    /// Significance level is not a finite number strictly inside (0, 1).
    #[error("Significance level must lie strictly inside (0, 1), got {0}")]
    InvalidAlpha(f64),

    /// No generator registered under this name.
    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),

    /// No randomness test registered under this name.
    #[error("Unknown randomness test: {0}")]
    UnknownTest(String),
}

/// Solver-related errors.
///
/// # Examples
/// ```
/// use prng_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },
}
