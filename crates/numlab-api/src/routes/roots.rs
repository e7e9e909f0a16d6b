//! Root-finding endpoints.

use axum::{extract::State, Json};
use numlab_math::expression::Expression;
use numlab_math::solvers::{bisection, newton_raphson};

use crate::config::SolverDefaults;
use crate::dto::{
    check_max_iterations, BisectionRequest, CompareRequest, CompareResponse, NewtonRequest,
    RootResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

/// Run bisection.
pub async fn bisection_handler(
    State(state): State<AppState>,
    Json(req): Json<BisectionRequest>,
) -> ApiResult<Json<RootResponse>> {
    run_bisection(&state.defaults, &req).map(Json)
}

/// Run Newton-Raphson.
pub async fn newton_handler(
    State(state): State<AppState>,
    Json(req): Json<NewtonRequest>,
) -> ApiResult<Json<RootResponse>> {
    run_newton(&state.defaults, &req).map(Json)
}

/// Run both methods; a failure in one is reported beside the other's result.
pub async fn compare(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Json<CompareResponse> {
    Json(CompareResponse {
        bisection: run_bisection(&state.defaults, &req.bisection).into(),
        newton: run_newton(&state.defaults, &req.newton).into(),
    })
}

fn run_bisection(defaults: &SolverDefaults, req: &BisectionRequest) -> ApiResult<RootResponse> {
    check_max_iterations(req.max_iterations)?;
    let f = Expression::parse(&req.expression)?;
    let config = defaults.bisection(req.tolerance, req.max_iterations);

    let result = bisection(f.as_fn(), req.a, req.b, &config)?;
    tracing::debug!(
        expression = %f,
        converged = result.converged,
        iterations = result.iterations,
        "bisection finished"
    );

    Ok(RootResponse::new("bisection", &result))
}

fn run_newton(defaults: &SolverDefaults, req: &NewtonRequest) -> ApiResult<RootResponse> {
    check_max_iterations(req.max_iterations)?;
    let f = Expression::parse(&req.expression)?;
    let df = Expression::parse(&req.derivative)?;
    let config = defaults.newton(req.tolerance, req.max_iterations);
    let x0 = req.x0.unwrap_or(defaults.newton_initial_guess);

    let result = newton_raphson(f.as_fn(), df.as_fn(), x0, &config)?;
    tracing::debug!(
        expression = %f,
        converged = result.converged,
        iterations = result.iterations,
        "newton finished"
    );

    Ok(RootResponse::new("newton", &result))
}
