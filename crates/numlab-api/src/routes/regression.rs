//! Dataset and regression endpoints.

use axum::{extract::State, Json};
use numlab_math::regression::{fit_with_options, RegressionModel};

use crate::dto::{DatasetListResponse, DatasetSummary, RegressionRequest, RegressionResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// List dataset categories.
pub async fn list_datasets(State(state): State<AppState>) -> Json<DatasetListResponse> {
    let categories: Vec<DatasetSummary> = state
        .dataset
        .iter()
        .map(|(name, series)| DatasetSummary {
            name: name.to_string(),
            years: series.x.clone(),
            samples: series.x.len(),
        })
        .collect();
    let count = categories.len();

    Json(DatasetListResponse { categories, count })
}

/// Fit a category's history and predict the target year.
pub async fn fit(
    State(state): State<AppState>,
    Json(req): Json<RegressionRequest>,
) -> ApiResult<Json<RegressionResponse>> {
    let series = state
        .dataset
        .get(&req.category)
        .ok_or_else(|| ApiError::NotFound(format!("Category '{}' not found", req.category)))?;

    let target = match req.target {
        Some(target) => target,
        None => series.x.last().map(|x| x + 1.0).ok_or_else(|| {
            ApiError::Validation(format!("Category '{}' has no samples", req.category))
        })?,
    };

    let model: RegressionModel = req.model.into();
    let result = fit_with_options(
        &series.x,
        &series.y,
        model,
        target,
        &state.defaults.fit_options(),
    )?;

    tracing::debug!(
        category = %req.category,
        ?model,
        prediction = result.prediction,
        "regression fitted"
    );

    Ok(Json(RegressionResponse {
        category: req.category,
        model: result.model,
        coefficients: result.coefficients,
        target: result.target,
        prediction: result.prediction,
        mse: result.mse,
        r_squared: result.r_squared,
        x: series.x.clone(),
        y: series.y.clone(),
        plot_x: result.plot_x,
        plot_y: result.plot_y,
    }))
}
