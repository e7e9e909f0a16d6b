//! Scalar root-finding algorithms.
//!
//! This module provides two classical solvers:
//!
//! - [`bisection`]: bracketing method, guaranteed to converge on a sign change
//! - [`newton_raphson`]: quadratic convergence near the root, requires a derivative
//!
//! Both return a [`RootResult`] carrying the full iteration trace. Running out
//! of iterations is not an error: the result has `converged == false`, no
//! root, and every step that was performed.
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Newton-Raphson | Fastest (quadratic) | May diverge | Derivative |
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//!
//! Neither falls back on the other; a caller wanting both runs both.
//!
//! # Example
//!
//! ```rust
//! use numlab_math::expression::Expression;
//! use numlab_math::solvers::{bisection, newton_raphson, SolverConfig};
//!
//! let f = Expression::parse("x^2 - 2").unwrap();
//! let df = Expression::parse("2*x").unwrap();
//! let config = SolverConfig::default();
//!
//! let by_bisection = bisection(f.as_fn(), 1.0, 2.0, &config).unwrap();
//! let by_newton = newton_raphson(f.as_fn(), df.as_fn(), 1.5, &config).unwrap();
//!
//! assert!(by_bisection.converged && by_newton.converged);
//! assert!(by_newton.iterations < by_bisection.iterations);
//! ```

mod bisection;
mod newton;

pub use bisection::bisection;
pub use newton::{newton_raphson, DERIVATIVE_FLOOR};

use serde::Serialize;

use crate::error::{MathError, MathResult};
use crate::trace::{IterationRecord, TraceRow};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the tolerance is finite and positive.
    pub fn validate(&self) -> MathResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "tolerance must be a positive finite number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Outcome of a root search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootResult<S> {
    /// The root, absent when the method did not converge.
    pub root: Option<f64>,
    /// Steps in iteration order.
    pub steps: Vec<S>,
    /// Number of iterations performed (equals `steps.len()`).
    pub iterations: u32,
    /// Whether the tolerance was met within the iteration budget.
    pub converged: bool,
}

impl<S> RootResult<S> {
    pub(crate) fn converged(root: f64, steps: Vec<S>) -> Self {
        Self {
            root: Some(root),
            iterations: steps.len() as u32,
            steps,
            converged: true,
        }
    }

    pub(crate) fn not_converged(steps: Vec<S>) -> Self {
        Self {
            root: None,
            iterations: steps.len() as u32,
            steps,
            converged: false,
        }
    }
}

impl<S: TraceRow> RootResult<S> {
    /// Error measure of the last step, if any step was taken.
    pub fn final_error(&self) -> Option<f64> {
        self.steps.last().map(TraceRow::error)
    }
}

impl<S: Into<IterationRecord>> RootResult<S> {
    /// Converts the steps into tagged records.
    pub fn into_records(self) -> Vec<IterationRecord> {
        self.steps.into_iter().map(Into::into).collect()
    }
}
