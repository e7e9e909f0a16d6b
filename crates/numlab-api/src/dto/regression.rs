//! Regression and dataset DTOs.

use numlab_math::regression::RegressionModel;
use serde::{Deserialize, Serialize};

/// Model family.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModelCode {
    #[default]
    Linear,
    #[serde(alias = "poly2")]
    Quadratic,
}

impl From<ModelCode> for RegressionModel {
    fn from(code: ModelCode) -> Self {
        match code {
            ModelCode::Linear => RegressionModel::Linear,
            ModelCode::Quadratic => RegressionModel::Quadratic,
        }
    }
}

/// Request to fit a category's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionRequest {
    pub category: String,

    /// Model family (default: linear).
    #[serde(default)]
    pub model: ModelCode,

    /// Year to predict (default: the year after the last sample).
    pub target: Option<f64>,
}

/// Fit, prediction and the data behind it.
#[derive(Debug, Clone, Serialize)]
pub struct RegressionResponse {
    pub category: String,
    pub model: RegressionModel,
    /// Ascending-degree coefficients.
    pub coefficients: Vec<f64>,
    pub target: f64,
    pub prediction: f64,
    pub mse: f64,
    /// Null when every historical value is identical.
    pub r_squared: Option<f64>,
    /// Historical years.
    pub x: Vec<f64>,
    /// Historical values.
    pub y: Vec<f64>,
    pub plot_x: Vec<f64>,
    pub plot_y: Vec<f64>,
}

/// Category summary.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub name: String,
    pub years: Vec<f64>,
    pub samples: usize,
}

/// List of dataset categories.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetListResponse {
    pub categories: Vec<DatasetSummary>,
    pub count: usize,
}
