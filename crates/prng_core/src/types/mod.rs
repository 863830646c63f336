//! Core data types.
//!
//! This module provides:
//! - `sequence`: The immutable [`Sequence`] of generated values
//! - `trace`: Auditable per-step records ([`Trace`], [`TraceStep`], [`StepOperation`])
//! - `result`: Structured test verdicts ([`TestResult`], [`TestDetails`], [`IntervalRow`])
//! - `error`: Structured error types for configuration and solver failures

pub mod error;
pub mod result;
pub mod sequence;
pub mod trace;

// Re-export commonly used types at module level
pub use error::{ConfigError, ConfigResult, SolverError};
pub use result::{
    IntervalRow, TestDetails, TestOptions, TestResult, TestResultBuilder, TestStatus,
};
pub use sequence::Sequence;
pub use trace::{StepOperation, Trace, TraceStep};
