//! Gaussian elimination with partial pivoting.

use nalgebra::DVector;

use super::LinearSystem;
use crate::error::{MathError, MathResult};

/// Relative threshold below which a pivot candidate counts as zero.
const PIVOT_EPSILON: f64 = 1e-12;

/// Solves `system` by Gaussian elimination with partial pivoting.
///
/// At each column the row with the largest absolute value in that column is
/// swapped into the pivot position, then the entries below are eliminated.
/// The upper triangular system is solved by back substitution.
///
/// # Errors
///
/// [`MathError::SingularMatrix`] when the matrix is all zero or every
/// candidate pivot in a column is below `1e-12 · max|a_ij|`;
/// [`MathError::Evaluation`] when elimination or back substitution leaves
/// the finite range.
pub fn gaussian_elimination(system: &LinearSystem) -> MathResult<DVector<f64>> {
    let n = system.dimension();
    let mut a = system.matrix().clone();
    let mut b = system.rhs().clone();

    let scale = a.amax();
    if scale == 0.0 {
        return Err(MathError::SingularMatrix { column: 0 });
    }
    let threshold = PIVOT_EPSILON * scale;

    // Forward elimination
    for k in 0..n {
        let (offset, pivot) = a
            .view_range(k.., k)
            .iter()
            .map(|v| v.abs())
            .enumerate()
            .fold((0, 0.0_f64), |best, (i, v)| if v > best.1 { (i, v) } else { best });

        if pivot < threshold {
            return Err(MathError::SingularMatrix { column: k });
        }

        let p = k + offset;
        if p != k {
            a.swap_rows(k, p);
            b.swap_rows(k, p);
        }

        for i in k + 1..n {
            let factor = a[(i, k)] / a[(k, k)];
            if factor == 0.0 {
                continue;
            }
            for j in k..n {
                a[(i, j)] -= factor * a[(k, j)];
            }
            b[i] -= factor * b[k];
        }

        if !a.iter().chain(b.iter()).all(|v| v.is_finite()) {
            return Err(MathError::evaluation(format!(
                "elimination overflowed at column {k}"
            )));
        }
    }

    // Back substitution
    let mut x = DVector::zeros(n);
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in i + 1..n {
            sum -= a[(i, j)] * x[j];
        }
        x[i] = sum / a[(i, i)];
        if !x[i].is_finite() {
            return Err(MathError::evaluation(format!(
                "back substitution overflowed at unknown {i}"
            )));
        }
    }

    log::debug!("gaussian elimination solved {n}x{n} system");
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn system(rows: Vec<Vec<f64>>, rhs: Vec<f64>) -> LinearSystem {
        LinearSystem::new(rows, rhs).unwrap()
    }

    #[test]
    fn test_diagonal_system() {
        let x = gaussian_elimination(&system(vec![vec![2.0, 0.0], vec![0.0, 2.0]], vec![4.0, 6.0]))
            .unwrap();

        assert_relative_eq!(x[0], 2.0);
        assert_relative_eq!(x[1], 3.0);
    }

    #[test]
    fn test_solve_linear_system() {
        let x = gaussian_elimination(&system(vec![vec![2.0, 1.0], vec![1.0, 3.0]], vec![5.0, 5.0]))
            .unwrap();

        assert_relative_eq!(x[0], 2.0, epsilon = 1e-10);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_requires_pivoting() {
        // Zero in the leading position forces a row swap
        let s = system(
            vec![
                vec![0.0, 2.0, 1.0],
                vec![1.0, -2.0, -3.0],
                vec![-1.0, 1.0, 2.0],
            ],
            vec![-8.0, 0.0, 3.0],
        );

        let x = gaussian_elimination(&s).unwrap();

        assert!(s.residual_norm(&x) < 1e-10);
        assert_relative_eq!(x[0], -4.0, epsilon = 1e-10);
        assert_relative_eq!(x[1], -5.0, epsilon = 1e-10);
        assert_relative_eq!(x[2], 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_singular_matrix() {
        let result =
            gaussian_elimination(&system(vec![vec![1.0, 1.0], vec![1.0, 1.0]], vec![2.0, 3.0]));

        assert!(matches!(result, Err(MathError::SingularMatrix { column: 1 })));
    }

    #[test]
    fn test_zero_column() {
        let result =
            gaussian_elimination(&system(vec![vec![0.0, 1.0], vec![0.0, 2.0]], vec![1.0, 2.0]));

        assert!(matches!(result, Err(MathError::SingularMatrix { column: 0 })));
    }

    #[test]
    fn test_small_scale_is_not_singular() {
        let x = gaussian_elimination(&system(
            vec![vec![1e-13, 0.0], vec![0.0, 1e-13]],
            vec![1e-13, 2e-13],
        ))
        .unwrap();

        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_matrix() {
        let result =
            gaussian_elimination(&system(vec![vec![0.0, 0.0], vec![0.0, 0.0]], vec![1.0, 1.0]));

        assert!(matches!(result, Err(MathError::SingularMatrix { column: 0 })));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let result =
            gaussian_elimination(&system(vec![vec![1e-11, 0.0], vec![0.0, 1.0]], vec![1e300, 1.0]));

        assert!(matches!(result, Err(MathError::Evaluation { .. })));
    }

    #[test]
    fn test_one_by_one() {
        let x = gaussian_elimination(&system(vec![vec![4.0]], vec![2.0])).unwrap();
        assert_relative_eq!(x[0], 0.5);
    }
}
