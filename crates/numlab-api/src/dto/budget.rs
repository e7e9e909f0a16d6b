//! Budget DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Request to price projected quantities and split the total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRequest {
    /// Projected quantity per category.
    pub projections: BTreeMap<String, f64>,

    /// Unit price (default from configuration).
    pub price: Option<f64>,

    /// Per-category weight multiplier; missing categories weigh 1.
    pub weights: Option<BTreeMap<String, f64>>,
}

/// Budget and its allocation.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetResponse {
    /// Sum of the projections.
    pub total_quantity: f64,
    pub price: f64,
    /// `price * total_quantity`.
    pub total_budget: f64,
    pub allocation: BTreeMap<String, f64>,
}
