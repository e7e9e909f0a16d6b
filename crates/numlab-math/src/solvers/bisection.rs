//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{RootResult, SolverConfig};
use crate::trace::BisectionStep;

/// Bisection root-finding algorithm.
///
/// A simple and reliable bracketing method that works by repeatedly
/// halving the interval and keeping the half that still contains a sign
/// change.
///
/// Requires: `f(a)` and `f(b)` of opposite signs, unless one endpoint is
/// already a root (`|f| < tolerance`), in which case it is returned with
/// zero iterations.
///
/// Each step records the interval, the midpoint `c`, `f(c)`, and the
/// half-width as the error. The search converges on `c` when `|f(c)|` or the
/// half-width drops below the tolerance.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - One end of the bracket
/// * `b` - Other end of the bracket (order does not matter)
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use numlab_math::solvers::{bisection, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| Ok(x * x - 2.0);
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::new(1e-10, 100)).unwrap();
/// assert!((result.root.unwrap() - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn bisection<F>(
    f: F,
    a: f64,
    b: f64,
    config: &SolverConfig,
) -> MathResult<RootResult<BisectionStep>>
where
    F: Fn(f64) -> MathResult<f64>,
{
    config.validate()?;
    if !a.is_finite() || !b.is_finite() {
        return Err(MathError::invalid_input(format!(
            "interval bounds must be finite, got [{a}, {b}]"
        )));
    }

    let tol = config.tolerance;
    let mut lo = a.min(b);
    let mut hi = a.max(b);

    let mut f_lo = f(lo)?;
    let f_hi = f(hi)?;

    // Handle case where endpoint is the root
    if f_lo.abs() < tol {
        log::debug!("bisection: lower endpoint {lo} is a root");
        return Ok(RootResult::converged(lo, Vec::new()));
    }
    if f_hi.abs() < tol {
        log::debug!("bisection: upper endpoint {hi} is a root");
        return Ok(RootResult::converged(hi, Vec::new()));
    }

    if f_lo.signum() == f_hi.signum() {
        return Err(MathError::InvalidInterval {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    let mut steps = Vec::new();

    for iteration in 1..=config.max_iterations {
        let mid = (lo + hi) / 2.0;
        let f_mid = f(mid)?;
        let half_width = (hi - lo) / 2.0;

        log::trace!("bisection {iteration}: [{lo}, {hi}] f({mid}) = {f_mid}");
        steps.push(BisectionStep {
            iteration,
            a: lo,
            b: hi,
            midpoint: mid,
            f_midpoint: f_mid,
            error: half_width,
        });

        if f_mid.abs() < tol || half_width < tol {
            log::debug!("bisection converged to {mid} after {iteration} iterations");
            return Ok(RootResult::converged(mid, steps));
        }

        // Keep the half whose endpoints still differ in sign
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    log::debug!(
        "bisection did not converge in {} iterations",
        config.max_iterations
    );
    Ok(RootResult::not_converged(steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tight() -> SolverConfig {
        SolverConfig::new(1e-10, 100)
    }

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| Ok(x * x - 2.0);

        let result = bisection(f, 1.0, 2.0, &tight()).unwrap();

        assert!(result.converged);
        assert_relative_eq!(result.root.unwrap(), std::f64::consts::SQRT_2, epsilon = 1e-9);
    }

    #[test]
    fn test_reversed_bracket() {
        let f = |x: f64| Ok(x * x - 2.0);

        // Reversed bracket should still work
        let result = bisection(f, 2.0, 1.0, &tight()).unwrap();

        assert_relative_eq!(result.root.unwrap(), std::f64::consts::SQRT_2, epsilon = 1e-9);
        assert!(result.steps.iter().all(|s| s.a < s.b));
    }

    #[test]
    fn test_invalid_interval() {
        let f = |x: f64| Ok(x * x - 2.0);

        // Both endpoints have same sign
        let result = bisection(f, 2.0, 3.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidInterval { .. })));
    }

    #[test]
    fn test_root_at_endpoint() {
        let f = |x: f64| Ok(x - 1.0);

        let result = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap();

        assert!(result.converged);
        assert_eq!(result.root, Some(1.0));
        assert_eq!(result.iterations, 0);
        assert!(result.steps.is_empty());
    }

    #[test]
    fn test_endpoint_root_without_sign_change() {
        // x^2 touches zero at 0 without changing sign
        let f = |x: f64| Ok(x * x);

        let result = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap();

        assert_eq!(result.root, Some(0.0));
    }

    #[test]
    fn test_identity_over_asymmetric_interval() {
        let f = |x: f64| Ok(x);
        let config = SolverConfig::new(1e-6, 100);

        let result = bisection(f, -1.0, 2.0, &config).unwrap();

        let root = result.root.unwrap();
        assert!(root.abs() <= 1e-6);
        assert_eq!(result.steps.len() as u32, result.iterations);
    }

    #[test]
    fn test_iterations_grow_logarithmically() {
        let f = |x: f64| Ok(x - 0.3);

        let loose = bisection(f, -1.0, 2.0, &SolverConfig::new(1e-3, 200)).unwrap();
        let tight = bisection(f, -1.0, 2.0, &SolverConfig::new(1e-9, 200)).unwrap();

        // Each halving gains a bit: at most ceil(log2(width / tol)) steps
        assert!(loose.iterations <= 12);
        assert!(tight.iterations <= 32);
        assert!(tight.iterations > loose.iterations);
    }

    #[test]
    fn test_not_converged_keeps_trace() {
        let f = |x: f64| Ok(x - 0.3);

        let result = bisection(f, -1.0, 2.0, &SolverConfig::new(1e-12, 5)).unwrap();

        assert!(!result.converged);
        assert_eq!(result.root, None);
        assert_eq!(result.iterations, 5);
        assert_eq!(result.steps.len(), 5);
        assert!(result.steps.iter().all(|s| s.error >= 0.0));
    }

    #[test]
    fn test_evaluation_error_propagates() {
        let f = |x: f64| {
            if x > 0.5 {
                Err(MathError::evaluation("out of domain"))
            } else {
                Ok(x)
            }
        };

        assert!(matches!(
            bisection(f, -1.0, 1.0, &SolverConfig::default()),
            Err(MathError::Evaluation { .. })
        ));
    }

    #[test]
    fn test_negative_root() {
        let f = |x: f64| Ok(x + 1.0);

        let result = bisection(f, -2.0, 0.0, &tight()).unwrap();

        assert_relative_eq!(result.root.unwrap(), -1.0, epsilon = 1e-9);
    }
}
