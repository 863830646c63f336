//! Root finding for quantile inversion.
//!
//! - [`BrentSolver`]: Robust bracketing method without derivative requirement
//! - [`expand_bracket`]: Doubling search for a sign change on unbounded support
//! - [`SolverConfig`]: Tolerance and iteration limits
//!
//! ## Example
//!
//! ```
//! use prng_core::math::solvers::{expand_bracket, BrentSolver};
//!
//! let f = |x: f64| x.sqrt() - 12.0;
//! let (lower, upper) = expand_bracket(f, 0.0, 1.0, 64).unwrap();
//! let root = BrentSolver::with_defaults().find_root(f, lower, upper).unwrap();
//! assert!((root - 144.0).abs() < 1e-8);
//! ```

mod brent;
mod config;

pub use brent::{expand_bracket, BrentSolver};
pub use config::SolverConfig;
