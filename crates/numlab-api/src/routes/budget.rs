//! Budget endpoint.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use numlab_math::allocation::allocate;

use crate::dto::{BudgetRequest, BudgetResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Price the projections and split the budget by weighted projection.
pub async fn budget(
    State(state): State<AppState>,
    Json(req): Json<BudgetRequest>,
) -> ApiResult<Json<BudgetResponse>> {
    if req.projections.is_empty() {
        return Err(ApiError::BadRequest("projections required".to_string()));
    }
    if let Some((name, value)) = req
        .projections
        .iter()
        .find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        return Err(ApiError::Validation(format!(
            "projection for '{name}' must be a non-negative number, got {value}"
        )));
    }

    let price = req.price.unwrap_or(state.defaults.unit_price);
    if !price.is_finite() || price < 0.0 {
        return Err(ApiError::Validation(format!(
            "price must be a non-negative number, got {price}"
        )));
    }

    let multipliers = req.weights.unwrap_or_default();
    if let Some(unknown) = multipliers
        .keys()
        .find(|k| !req.projections.contains_key(*k))
    {
        return Err(ApiError::Validation(format!(
            "weight given for unknown category '{unknown}'"
        )));
    }

    let total_quantity: f64 = req.projections.values().sum();
    let total_budget = price * total_quantity;

    let weights: BTreeMap<String, f64> = req
        .projections
        .iter()
        .map(|(name, quantity)| {
            let multiplier = multipliers.get(name).copied().unwrap_or(1.0);
            (name.clone(), multiplier * quantity)
        })
        .collect();

    let result = allocate(&weights, total_budget)?;

    Ok(Json(BudgetResponse {
        total_quantity,
        price,
        total_budget,
        allocation: result.allocations,
    }))
}
