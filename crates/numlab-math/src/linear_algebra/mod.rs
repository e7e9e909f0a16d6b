//! Dense linear systems `A·x = b`.
//!
//! - [`SolveMethod::Gaussian`]: Gaussian elimination with partial pivoting
//! - [`SolveMethod::Jacobi`] and [`SolveMethod::GaussSeidel`]: stationary
//!   iterations recording every sweep
//!
//! Iterative methods that fail to converge are reported through the result,
//! not as errors, so divergence can be inspected.
//!
//! # Example
//!
//! ```rust
//! use numlab_math::linear_algebra::{solve, LinearSystem, LinearSystemResult, SolveMethod};
//!
//! let system = LinearSystem::new(vec![vec![2.0, 0.0], vec![0.0, 2.0]], vec![4.0, 6.0]).unwrap();
//!
//! match solve(&system, &SolveMethod::Gaussian).unwrap() {
//!     LinearSystemResult::Direct { solution } => assert_eq!(solution, vec![2.0, 3.0]),
//!     LinearSystemResult::Iterative(_) => unreachable!(),
//! }
//! ```

mod gaussian;
mod iterative;

pub use gaussian::gaussian_elimination;
pub use iterative::{iterate, IterativeConfig, IterativeMethod, IterativeResult};

use nalgebra::{DMatrix, DVector};
use serde::Serialize;

use crate::error::{MathError, MathResult};

/// A validated square system `A·x = b`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
}

impl LinearSystem {
    /// Builds a system from row-major coefficients and a right-hand side.
    ///
    /// # Errors
    ///
    /// [`MathError::DimensionMismatch`] if the matrix is empty, not square,
    /// or does not match `rhs`; [`MathError::InvalidInput`] for non-finite
    /// entries.
    pub fn new(rows: Vec<Vec<f64>>, rhs: Vec<f64>) -> MathResult<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(MathError::dimension_mismatch("matrix rows", 1, 0));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(MathError::dimension_mismatch(
                format!("matrix row {i}"),
                n,
                row.len(),
            ));
        }
        if rhs.len() != n {
            return Err(MathError::dimension_mismatch("right-hand side", n, rhs.len()));
        }
        if !rows.iter().flatten().chain(&rhs).all(|v| v.is_finite()) {
            return Err(MathError::invalid_input(
                "system coefficients must be finite numbers",
            ));
        }

        Ok(Self {
            matrix: DMatrix::from_fn(n, n, |i, j| rows[i][j]),
            rhs: DVector::from_vec(rhs),
        })
    }

    /// Number of unknowns.
    pub fn dimension(&self) -> usize {
        self.rhs.len()
    }

    /// Coefficient matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Right-hand side.
    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }

    /// Euclidean norm of `A·x - b`.
    pub fn residual_norm(&self, x: &DVector<f64>) -> f64 {
        (&self.matrix * x - &self.rhs).norm()
    }

    /// Returns true if every row's diagonal entry strictly dominates the rest.
    pub fn is_diagonally_dominant(&self) -> bool {
        self.matrix.row_iter().enumerate().all(|(i, row)| {
            let off_diagonal: f64 = row
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, v)| v.abs())
                .sum();
            row[i].abs() > off_diagonal
        })
    }
}

/// How to solve a [`LinearSystem`].
#[derive(Debug, Clone, PartialEq)]
pub enum SolveMethod {
    /// Gaussian elimination with partial pivoting.
    Gaussian,
    /// Jacobi iteration.
    Jacobi(IterativeConfig),
    /// Gauss-Seidel iteration.
    GaussSeidel(IterativeConfig),
}

/// Outcome of [`solve`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinearSystemResult {
    /// Exact solution from the direct method.
    Direct {
        /// Solution vector, one entry per unknown.
        solution: Vec<f64>,
    },
    /// Iterative solution with its trace.
    Iterative(IterativeResult),
}

impl LinearSystemResult {
    /// The solution vector, if one was found.
    pub fn solution(&self) -> Option<&[f64]> {
        match self {
            Self::Direct { solution } => Some(solution),
            Self::Iterative(result) => result.solution.as_deref(),
        }
    }
}

/// Solves `system` with `method`.
pub fn solve(system: &LinearSystem, method: &SolveMethod) -> MathResult<LinearSystemResult> {
    match method {
        SolveMethod::Gaussian => {
            let solution = gaussian_elimination(system)?;
            Ok(LinearSystemResult::Direct {
                solution: solution.iter().copied().collect(),
            })
        }
        SolveMethod::Jacobi(config) => {
            iterate(system, IterativeMethod::Jacobi, config).map(LinearSystemResult::Iterative)
        }
        SolveMethod::GaussSeidel(config) => {
            iterate(system, IterativeMethod::GaussSeidel, config)
                .map(LinearSystemResult::Iterative)
        }
    }
}
