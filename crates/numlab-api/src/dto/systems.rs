//! Linear system DTOs.

use serde::{Deserialize, Serialize};

use super::common::TraceTable;

/// Largest system the server will solve.
pub const MAX_SYSTEM_DIMENSION: usize = 200;

/// Solution method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SystemMethod {
    #[default]
    #[serde(alias = "gauss")]
    Gaussian,
    Jacobi,
    #[serde(alias = "gs")]
    GaussSeidel,
}

/// Request to solve `A x = b`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveSystemRequest {
    /// Coefficient matrix, row-major.
    pub a: Vec<Vec<f64>>,
    pub b: Vec<f64>,

    /// Method (default: gaussian).
    #[serde(default)]
    pub method: SystemMethod,

    /// Starting estimate for iterative methods (default: zeros).
    pub x0: Option<Vec<f64>>,
    pub tolerance: Option<f64>,
    pub max_iterations: Option<u32>,
}

/// Solution and, for iterative methods, the trace.
#[derive(Debug, Clone, Serialize)]
pub struct SolveSystemResponse {
    pub method: SystemMethod,
    /// Null when an iterative method did not converge.
    pub solution: Option<Vec<f64>>,
    pub converged: bool,
    /// Null for the direct method.
    pub iterations: Option<u32>,
    /// Null for the direct method.
    pub trace: Option<TraceTable>,
    /// Null for the direct method.
    pub diagonally_dominant: Option<bool>,
    /// `|A x - b|` for the returned solution.
    pub residual_norm: Option<f64>,
}
