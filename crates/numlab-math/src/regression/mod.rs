//! Least-squares curve fitting.
//!
//! Fits a linear or quadratic polynomial to `(x, y)` samples, reports the
//! goodness of fit, predicts a target input and produces a dense plotting
//! sequence.
//!
//! # Example
//!
//! ```rust
//! use numlab_math::regression::{fit, RegressionModel};
//!
//! let years = [2020.0, 2021.0, 2022.0, 2023.0];
//! let students = [100.0, 110.0, 120.0, 130.0];
//!
//! let result = fit(&years, &students, RegressionModel::Linear, 2024.0).unwrap();
//! assert!((result.prediction - 140.0).abs() < 1e-8);
//! assert!((result.r_squared.unwrap() - 1.0).abs() < 1e-12);
//! ```

mod least_squares;
mod polynomial;

pub use polynomial::Polynomial;

use serde::Serialize;

use crate::error::{MathError, MathResult};

/// Default number of points in the plotting sequence.
pub const DEFAULT_PLOT_POINTS: usize = 100;

/// Model family to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegressionModel {
    /// `y = c0 + c1·x`
    Linear,
    /// `y = c0 + c1·x + c2·x²`
    Quadratic,
}

impl RegressionModel {
    /// Polynomial degree of the model.
    pub fn degree(self) -> usize {
        match self {
            Self::Linear => 1,
            Self::Quadratic => 2,
        }
    }

    /// Minimum number of distinct samples needed for a unique fit.
    pub fn min_samples(self) -> usize {
        self.degree() + 1
    }
}

/// Options for [`fit_with_options`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    /// Number of evenly spaced points in the plotting sequence (at least 2).
    pub plot_points: usize,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            plot_points: DEFAULT_PLOT_POINTS,
        }
    }
}

/// Outcome of a regression fit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionResult {
    /// Fitted model family.
    pub model: RegressionModel,
    /// Ascending-degree coefficients: `coefficients[k]` multiplies `x^k`.
    pub coefficients: Vec<f64>,
    /// Input the prediction was made for.
    pub target: f64,
    /// Fitted value at `target`.
    pub prediction: f64,
    /// Fitted values at the training inputs.
    pub fitted: Vec<f64>,
    /// Mean squared error over the training samples.
    pub mse: f64,
    /// Coefficient of determination; absent when all `y` are identical.
    pub r_squared: Option<f64>,
    /// Plotting abscissae spanning the training range and the target.
    pub plot_x: Vec<f64>,
    /// Fitted values at `plot_x`.
    pub plot_y: Vec<f64>,
}

/// Fits `model` to the samples and predicts at `target`.
pub fn fit(
    xs: &[f64],
    ys: &[f64],
    model: RegressionModel,
    target: f64,
) -> MathResult<RegressionResult> {
    fit_with_options(xs, ys, model, target, &FitOptions::default())
}

/// Fits `model` to the samples with explicit options.
///
/// # Errors
///
/// - [`MathError::DimensionMismatch`] if `xs` and `ys` differ in length
/// - [`MathError::InsufficientData`] if there are fewer than `degree + 1`
///   samples or distinct abscissae
/// - [`MathError::InvalidInput`] for non-finite values or fewer than two
///   plot points
pub fn fit_with_options(
    xs: &[f64],
    ys: &[f64],
    model: RegressionModel,
    target: f64,
    options: &FitOptions,
) -> MathResult<RegressionResult> {
    if xs.len() != ys.len() {
        return Err(MathError::dimension_mismatch("ys", xs.len(), ys.len()));
    }

    let required = model.min_samples();
    if xs.len() < required {
        return Err(MathError::insufficient_data(required, xs.len()));
    }

    if !xs.iter().chain(ys).all(|v| v.is_finite()) || !target.is_finite() {
        return Err(MathError::invalid_input(
            "samples and target must be finite numbers",
        ));
    }

    if options.plot_points < 2 {
        return Err(MathError::invalid_input(format!(
            "plot_points must be at least 2, got {}",
            options.plot_points
        )));
    }

    let distinct = count_distinct(xs);
    if distinct < required {
        return Err(MathError::insufficient_data(required, distinct));
    }

    let polynomial = least_squares::polyfit(xs, ys, model.degree())?;

    let fitted: Vec<f64> = xs.iter().map(|&x| polynomial.evaluate(x)).collect();
    let ss_res: f64 = ys
        .iter()
        .zip(&fitted)
        .map(|(y, f)| (y - f).powi(2))
        .sum();
    let n = ys.len() as f64;
    let mse = ss_res / n;

    let r_squared = if ys.iter().all(|&y| y == ys[0]) {
        None
    } else {
        let mean = ys.iter().sum::<f64>() / n;
        let ss_tot: f64 = ys.iter().map(|y| (y - mean).powi(2)).sum();
        Some(1.0 - ss_res / ss_tot)
    };

    let (lo, hi) = xs
        .iter()
        .fold((target, target), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    let plot_x = linspace(lo, hi, options.plot_points);
    let plot_y = plot_x.iter().map(|&x| polynomial.evaluate(x)).collect();

    let prediction = polynomial.evaluate(target);
    log::debug!(
        "{:?} fit over {} samples: mse = {mse}, prediction({target}) = {prediction}",
        model,
        xs.len()
    );

    Ok(RegressionResult {
        model,
        coefficients: polynomial.coefficients().to_vec(),
        target,
        prediction,
        fitted,
        mse,
        r_squared,
        plot_x,
        plot_y,
    })
}

fn count_distinct(xs: &[f64]) -> usize {
    let mut sorted = xs.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted.len()
}

/// `count` evenly spaced values from `lo` to `hi` inclusive.
fn linspace(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    let step = (hi - lo) / (count - 1) as f64;
    (0..count)
        .map(|i| if i == count - 1 { hi } else { lo + step * i as f64 })
        .collect()
}
