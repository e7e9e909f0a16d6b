//! Stationary iterative methods (Jacobi, Gauss-Seidel).

use nalgebra::DVector;
use serde::Serialize;

use super::LinearSystem;
use crate::error::{MathError, MathResult};
use crate::trace::VectorStep;

/// Default tolerance on the max-norm of successive differences.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default maximum number of sweeps.
pub const DEFAULT_MAX_ITERATIONS: u32 = 500;

/// Diagonal entries smaller than this in magnitude cannot be divided by.
const DIAGONAL_FLOOR: f64 = 1e-14;

/// Stationary iteration scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IterativeMethod {
    /// Every unknown is updated from the previous sweep's estimate.
    Jacobi,
    /// Each unknown uses the values already updated in the current sweep.
    GaussSeidel,
}

impl IterativeMethod {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Jacobi => "Jacobi",
            Self::GaussSeidel => "Gauss-Seidel",
        }
    }
}

/// Configuration for iterative solvers.
#[derive(Debug, Clone, PartialEq)]
pub struct IterativeConfig {
    /// Tolerance on the max-norm of successive differences.
    pub tolerance: f64,
    /// Maximum number of sweeps.
    pub max_iterations: u32,
    /// Starting estimate; zeros when absent.
    pub initial_guess: Option<Vec<f64>>,
}

impl Default for IterativeConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_guess: None,
        }
    }
}

impl IterativeConfig {
    /// Creates a configuration starting from zeros.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            initial_guess: None,
        }
    }

    /// Sets the starting estimate.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: Vec<f64>) -> Self {
        self.initial_guess = Some(initial_guess);
        self
    }

    fn starting_point(&self, n: usize) -> MathResult<DVector<f64>> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "tolerance must be a positive finite number, got {}",
                self.tolerance
            )));
        }

        match &self.initial_guess {
            None => Ok(DVector::zeros(n)),
            Some(guess) if guess.len() != n => {
                Err(MathError::dimension_mismatch("initial guess", n, guess.len()))
            }
            Some(guess) if !guess.iter().all(|v| v.is_finite()) => Err(MathError::invalid_input(
                "initial guess must contain finite numbers",
            )),
            Some(guess) => Ok(DVector::from_column_slice(guess)),
        }
    }
}

/// Outcome of an iterative solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterativeResult {
    /// Scheme that produced the result.
    pub method: IterativeMethod,
    /// Final estimate, absent when the iteration did not converge.
    pub solution: Option<Vec<f64>>,
    /// Sweeps in iteration order.
    pub steps: Vec<VectorStep>,
    /// Number of sweeps recorded.
    pub iterations: u32,
    /// Whether successive estimates agreed within tolerance.
    pub converged: bool,
    /// Whether `A` is strictly diagonally dominant (sufficient for convergence).
    pub diagonally_dominant: bool,
}

/// Runs `method` on `system`.
///
/// Stops when the max-norm of the change between sweeps drops below the
/// tolerance, after `max_iterations` sweeps, or as soon as the estimate stops
/// being finite. Only the first case counts as converged; the others return
/// the trace so far with no solution.
///
/// # Errors
///
/// [`MathError::ZeroDiagonal`] if a diagonal entry is (near) zero,
/// [`MathError::DimensionMismatch`] for a wrongly sized initial guess, and
/// [`MathError::InvalidInput`] for a bad tolerance.
pub fn iterate(
    system: &LinearSystem,
    method: IterativeMethod,
    config: &IterativeConfig,
) -> MathResult<IterativeResult> {
    let n = system.dimension();
    let a = system.matrix();
    let b = system.rhs();

    let mut x = config.starting_point(n)?;

    if let Some(row) = (0..n).find(|&i| a[(i, i)].abs() < DIAGONAL_FLOOR) {
        return Err(MathError::ZeroDiagonal { row });
    }

    let diagonally_dominant = system.is_diagonally_dominant();
    if !diagonally_dominant {
        log::debug!(
            "{}: matrix is not diagonally dominant, convergence not guaranteed",
            method.name()
        );
    }

    let mut steps = Vec::new();
    let mut converged = false;

    for iteration in 1..=config.max_iterations {
        let previous = x.clone();

        for i in 0..n {
            let mut sum = b[i];
            for j in (0..n).filter(|&j| j != i) {
                let xj = match method {
                    IterativeMethod::Jacobi => previous[j],
                    IterativeMethod::GaussSeidel => x[j],
                };
                sum -= a[(i, j)] * xj;
            }
            x[i] = sum / a[(i, i)];
        }

        let error = (&x - &previous).amax();
        let residual = system.residual_norm(&x);

        if !error.is_finite() || !residual.is_finite() || !x.iter().all(|v| v.is_finite()) {
            log::debug!("{} diverged at iteration {iteration}", method.name());
            break;
        }

        log::trace!("{} {iteration}: error = {error}, residual = {residual}", method.name());
        steps.push(VectorStep {
            iteration,
            estimate: x.iter().copied().collect(),
            error,
            residual,
        });

        if error < config.tolerance {
            converged = true;
            break;
        }
    }

    log::debug!(
        "{} finished after {} iterations (converged: {converged})",
        method.name(),
        steps.len()
    );

    Ok(IterativeResult {
        method,
        solution: converged.then(|| x.iter().copied().collect()),
        iterations: steps.len() as u32,
        steps,
        converged,
        diagonally_dominant,
    })
}
