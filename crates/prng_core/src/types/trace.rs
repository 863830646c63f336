//! Step-by-step generation traces.
//!
//! A [`Trace`] holds one [`TraceStep`] per generated value, with enough
//! information to redo the arithmetic by hand. Rendering a step with
//! `Display` gives the classic worksheet line:
//!
//! ```text
//! Y0=(1234)^2=01522756   X1=5227   r1=0.5227
//! ```

use serde::Serialize;
use std::fmt;

/// The arithmetic combination of prior state performed in one step.
///
/// Operands are kept as display strings, zero-padded to the state width D.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepOperation {
    /// `Y = X²`
    Square {
        /// Current state
        x: String,
    },
    /// `Y = a · X`
    ScaledProduct {
        /// Multiplier constant
        constant: String,
        /// Current state
        x: String,
    },
    /// `Y = X_prev · X_curr`
    MiddleProduct {
        /// Older of the two state values
        prev: String,
        /// Newer of the two state values
        curr: String,
    },
}

impl fmt::Display for StepOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOperation::Square { x } => write!(f, "({})^2", x),
            StepOperation::ScaledProduct { constant, x } => write!(f, "({})*({})", constant, x),
            StepOperation::MiddleProduct { prev, curr } => write!(f, "({})*({})", prev, curr),
        }
    }
}

/// One generation step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceStep {
    /// Zero-based step index j (labels the product `Yj`).
    pub step: usize,
    /// Index of the produced state (`X{label}`, `r{label}`).
    ///
    /// `step + 1` for single-state generators, `step + 2` for middle product.
    pub label: usize,
    /// Operation that formed the intermediate product.
    pub operation: StepOperation,
    /// Intermediate product digits, including the parity zero when one was
    /// prepended. A negative product keeps its leading `-`.
    pub product: String,
    /// The D extracted centre digits, leading zeros preserved.
    pub extracted: String,
    /// Resulting fraction `extracted / 10^D`.
    pub value: f64,
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Y{}={}={}   X{}={}   r{}=0.{}",
            self.step,
            self.operation,
            self.product,
            self.label,
            self.extracted,
            self.label,
            self.extracted
        )
    }
}

/// Append-only record of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace(Vec<TraceStep>);

impl Trace {
    /// Create an empty trace with room for `capacity` steps.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Append a step.
    pub fn push(&mut self, step: TraceStep) {
        self.0.push(step);
    }

    /// All recorded steps in order.
    pub fn steps(&self) -> &[TraceStep] {
        &self.0
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no steps were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the steps.
    pub fn iter(&self) -> std::slice::Iter<'_, TraceStep> {
        self.0.iter()
    }

    /// Rendered worksheet lines, one per step.
    pub fn lines(&self) -> Vec<String> {
        self.0.iter().map(|step| step.to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceStep;
    type IntoIter = std::slice::Iter<'a, TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.0 {
            writeln!(f, "{}", step)?;
        }
        Ok(())
    }
}
