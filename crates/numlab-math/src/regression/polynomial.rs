//! Polynomials in ascending-degree form.

/// A polynomial `c[0] + c[1]·x + c[2]·x² + …`.
///
/// Fitted polynomials additionally keep their coefficients in the centered,
/// scaled variable `t = (x - center) / scale` they were solved in, and
/// evaluate through that form to avoid cancellation for inputs far from zero
/// (calendar years, for instance).
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
    center: f64,
    scale: f64,
    scaled: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from ascending-degree coefficients.
    #[cfg(test)]
    fn new(coefficients: Vec<f64>) -> Self {
        Self {
            scaled: coefficients.clone(),
            coefficients,
            center: 0.0,
            scale: 1.0,
        }
    }

    /// Creates a polynomial from coefficients of `t = (x - center) / scale`.
    ///
    /// `scale` must be non-zero.
    pub(crate) fn from_scaled(scaled: Vec<f64>, center: f64, scale: f64) -> Self {
        let degree = scaled.len().saturating_sub(1);
        let mut coefficients = vec![0.0; scaled.len()];

        // Σ c_k ((x - m)/s)^k expanded binomially into powers of x
        for (k, &c) in scaled.iter().enumerate() {
            let factor = c / scale.powi(k as i32);
            for j in 0..=k {
                coefficients[j] += factor * binomial(k, j) * (-center).powi((k - j) as i32);
            }
        }
        debug_assert_eq!(coefficients.len(), degree + 1);

        Self {
            coefficients,
            center,
            scale,
            scaled,
        }
    }

    /// Ascending-degree coefficients in the raw variable.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Degree (number of coefficients minus one).
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates the polynomial at `x` using Horner's scheme.
    pub fn evaluate(&self, x: f64) -> f64 {
        let t = (x - self.center) / self.scale;
        self.scaled.iter().rev().fold(0.0, |acc, &c| acc * t + c)
    }
}

fn binomial(n: usize, k: usize) -> f64 {
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}
