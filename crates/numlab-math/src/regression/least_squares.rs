//! Ordinary least squares for low-degree polynomials.

use nalgebra::{DMatrix, DVector};

use super::polynomial::Polynomial;
use crate::error::{MathError, MathResult};

/// Singular values below this are treated as zero by the SVD solve.
const SVD_EPSILON: f64 = 1e-12;

/// Fits a polynomial of `degree` to the samples by least squares.
///
/// The abscissae are centered on their mean and scaled into `[-1, 1]` before
/// building the Vandermonde design, which keeps the problem well conditioned
/// for inputs such as calendar years. The design is solved by SVD, which
/// handles the tall (more rows than columns) system directly.
///
/// Callers validate lengths and the number of distinct abscissae.
pub(crate) fn polyfit(xs: &[f64], ys: &[f64], degree: usize) -> MathResult<Polynomial> {
    let n = xs.len();
    let center = xs.iter().sum::<f64>() / n as f64;
    let scale = xs
        .iter()
        .map(|x| (x - center).abs())
        .fold(0.0_f64, f64::max);

    if scale == 0.0 {
        return Err(MathError::insufficient_data(degree + 1, 1));
    }

    let design = DMatrix::from_fn(n, degree + 1, |i, k| {
        ((xs[i] - center) / scale).powi(k as i32)
    });
    let rhs = DVector::from_column_slice(ys);

    let svd = design.svd(true, true);
    let beta = svd
        .solve(&rhs, SVD_EPSILON)
        .map_err(|e| MathError::evaluation(format!("least squares solve failed: {e}")))?;

    if !beta.iter().all(|v| v.is_finite()) {
        return Err(MathError::evaluation(
            "least squares produced non-finite coefficients",
        ));
    }

    Ok(Polynomial::from_scaled(
        beta.iter().copied().collect(),
        center,
        scale,
    ))
}
