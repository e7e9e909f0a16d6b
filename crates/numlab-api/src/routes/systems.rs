//! Linear system endpoint.

use axum::{extract::State, Json};
use numlab_math::linear_algebra::{solve, LinearSystem, LinearSystemResult, SolveMethod};
use numlab_math::nalgebra::DVector;

use crate::dto::{
    check_max_iterations, SolveSystemRequest, SolveSystemResponse, SystemMethod, TraceTable,
    MAX_SYSTEM_DIMENSION,
};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Solve `A x = b`.
pub async fn solve_system(
    State(state): State<AppState>,
    Json(req): Json<SolveSystemRequest>,
) -> ApiResult<Json<SolveSystemResponse>> {
    if req.a.len() > MAX_SYSTEM_DIMENSION {
        return Err(ApiError::Validation(format!(
            "system dimension must be at most {MAX_SYSTEM_DIMENSION}, got {}",
            req.a.len()
        )));
    }
    check_max_iterations(req.max_iterations)?;

    let system = LinearSystem::new(req.a, req.b)?;

    let method = match req.method {
        SystemMethod::Gaussian => SolveMethod::Gaussian,
        SystemMethod::Jacobi => SolveMethod::Jacobi(state.defaults.iterative(
            req.tolerance,
            req.max_iterations,
            req.x0,
        )),
        SystemMethod::GaussSeidel => SolveMethod::GaussSeidel(state.defaults.iterative(
            req.tolerance,
            req.max_iterations,
            req.x0,
        )),
    };

    let result = solve(&system, &method)?;
    let residual_norm = result
        .solution()
        .map(|x| system.residual_norm(&DVector::from_column_slice(x)));

    let response = match result {
        LinearSystemResult::Direct { solution } => SolveSystemResponse {
            method: req.method,
            solution: Some(solution),
            converged: true,
            iterations: None,
            trace: None,
            diagonally_dominant: None,
            residual_norm,
        },
        LinearSystemResult::Iterative(result) => {
            tracing::debug!(
                method = result.method.name(),
                converged = result.converged,
                iterations = result.iterations,
                "iterative solve finished"
            );
            SolveSystemResponse {
                method: req.method,
                trace: Some(TraceTable::from_steps(&result.steps)),
                solution: result.solution,
                converged: result.converged,
                iterations: Some(result.iterations),
                diagonally_dominant: Some(result.diagonally_dominant),
                residual_norm,
            }
        }
    };

    Ok(Json(response))
}
