//! Root-finding DTOs.

use numlab_math::solvers::RootResult;
use numlab_math::trace::TraceRow;
use serde::{Deserialize, Serialize};

use super::common::TraceTable;
use crate::error::{ApiError, ErrorBody};

/// Request to run bisection on `[a, b]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BisectionRequest {
    /// Expression in `x`, e.g. `x^3 - 2*x - 5`.
    pub expression: String,
    pub a: f64,
    pub b: f64,
    pub tolerance: Option<f64>,
    pub max_iterations: Option<u32>,
}

/// Request to run Newton-Raphson from `x0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewtonRequest {
    pub expression: String,
    /// Derivative of `expression`, supplied by the caller.
    pub derivative: String,
    /// Initial guess (default from configuration).
    pub x0: Option<f64>,
    pub tolerance: Option<f64>,
    pub max_iterations: Option<u32>,
}

/// Both methods on the same problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub bisection: BisectionRequest,
    pub newton: NewtonRequest,
}

/// Outcome of a root search.
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub method: &'static str,
    /// Null when the method did not converge.
    pub root: Option<f64>,
    pub converged: bool,
    pub iterations: u32,
    /// Error measure of the last step; null when no step was taken.
    pub final_error: Option<f64>,
    pub trace: TraceTable,
}

impl RootResponse {
    pub fn new<S: TraceRow>(method: &'static str, result: &RootResult<S>) -> Self {
        Self {
            method,
            root: result.root,
            converged: result.converged,
            iterations: result.iterations,
            final_error: result.final_error(),
            trace: TraceTable::from_steps(&result.steps),
        }
    }
}

/// One side of a comparison: either a result or the error that method hit.
#[derive(Debug, Clone, Serialize)]
pub struct MethodOutcome {
    pub result: Option<RootResponse>,
    pub error: Option<ErrorBody>,
}

impl From<Result<RootResponse, ApiError>> for MethodOutcome {
    fn from(outcome: Result<RootResponse, ApiError>) -> Self {
        match outcome {
            Ok(result) => Self {
                result: Some(result),
                error: None,
            },
            Err(err) => Self {
                result: None,
                error: Some(err.body()),
            },
        }
    }
}

/// Side-by-side results. No winner is declared.
#[derive(Debug, Clone, Serialize)]
pub struct CompareResponse {
    pub bisection: MethodOutcome,
    pub newton: MethodOutcome,
}
