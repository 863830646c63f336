//! Brent's method root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Brent's method root finder.
///
/// Mixes bisection, secant steps and inverse quadratic interpolation. Needs no
/// derivative and always converges for a continuous function with a valid
/// bracket, which makes it the workhorse for inverting monotone CDFs.
///
/// # Example
///
/// ```
/// use prng_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::default());
///
/// // Invert F(x) = 1 - exp(-x) at p = 0.5, i.e. find ln 2.
/// let root = solver
///     .find_root(|x: f64| 1.0 - (-x).exp() - 0.5, 0.0, 5.0)
///     .unwrap();
/// assert!((root - 2.0_f64.ln()).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with [`SolverConfig::default`].
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// The solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` inside `[a, b]`.
    ///
    /// # Errors
    ///
    /// * `SolverError::NoBracket` - `f(a)` and `f(b)` have the same sign
    /// * `SolverError::MaxIterationsExceeded` - no convergence within the limit
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let zero = T::zero();
        let half = T::from(0.5).unwrap_or_else(|| T::one() / (T::one() + T::one()));
        let two = T::one() + T::one();
        let three = two + T::one();
        let tolerance = self.config.tolerance;

        let (mut a, mut b) = (a, b);
        let (mut fa, mut fb) = (f(a), f(b));

        if fa == zero {
            return Ok(a);
        }
        if fb == zero {
            return Ok(b);
        }
        if (fa > zero) == (fb > zero) {
            return Err(SolverError::NoBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        let (mut c, mut fc) = (b, fb);
        let mut d = b - a;
        let mut e = d;

        for _ in 0..self.config.max_iterations {
            // Keep the root between b and c.
            if (fb > zero) == (fc > zero) {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }
            // b is always the best estimate so far.
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            let tol = two * T::epsilon() * b.abs() + half * tolerance;
            let midpoint = half * (c - b);
            if midpoint.abs() <= tol || fb.abs() < tolerance {
                return Ok(b);
            }

            if e.abs() >= tol && fa.abs() > fb.abs() {
                let s = fb / fa;
                let (mut p, mut q);
                if a == c {
                    // Secant step.
                    p = two * midpoint * s;
                    q = T::one() - s;
                } else {
                    // Inverse quadratic interpolation.
                    let qa = fa / fc;
                    let r = fb / fc;
                    p = s * (two * midpoint * qa * (qa - r) - (b - a) * (r - T::one()));
                    q = (qa - T::one()) * (r - T::one()) * (s - T::one());
                }
                if p > zero {
                    q = -q;
                }
                p = p.abs();

                let limit = (three * midpoint * q - (tol * q).abs()).min((e * q).abs());
                if two * p < limit {
                    e = d;
                    d = p / q;
                } else {
                    d = midpoint;
                    e = d;
                }
            } else {
                d = midpoint;
                e = d;
            }

            a = b;
            fa = fb;
            b = if d.abs() > tol {
                b + d
            } else if midpoint > zero {
                b + tol
            } else {
                b - tol
            };
            fb = f(b);
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}

/// Widen `[lower, upper]` around an increasing `f` until
/// `f(lower) <= 0 <= f(upper)`.
///
/// Each end that fails its check moves outwards by a step that doubles on
/// every round, starting from the initial width. At most `max_steps` rounds
/// are taken. Used to bracket quantiles on unbounded support.
///
/// # Example
///
/// ```
/// use prng_core::math::solvers::expand_bracket;
///
/// let (lower, upper) = expand_bracket(|x: f64| x - 100.0, 0.0, 1.0, 64).unwrap();
/// assert!(lower <= 100.0 && upper >= 100.0);
/// ```
pub fn expand_bracket<T, F>(
    f: F,
    lower: T,
    upper: T,
    max_steps: usize,
) -> Result<(T, T), SolverError>
where
    T: Float,
    F: Fn(T) -> T,
{
    let zero = T::zero();
    let two = T::one() + T::one();
    let (mut lower, mut upper) = (lower, upper);
    let mut step = (upper - lower).abs().max(T::epsilon());

    for _ in 0..=max_steps {
        let below = f(lower) <= zero;
        let above = f(upper) >= zero;
        if below && above {
            return Ok((lower, upper));
        }
        step = step * two;
        if !below {
            lower = lower - step;
        }
        if !above {
            upper = upper + step;
        }
    }

    Err(SolverError::NoBracket {
        a: lower.to_f64().unwrap_or(f64::NAN),
        b: upper.to_f64().unwrap_or(f64::NAN),
    })
}
