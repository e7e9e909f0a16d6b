//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{RootResult, SolverConfig};
use crate::trace::NewtonStep;

/// Derivatives smaller than this in magnitude abort the iteration.
pub const DERIVATIVE_FLOOR: f64 = 1e-14;

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// This method has quadratic convergence near the root but requires
/// the derivative of the function. It converges when `|x_{n+1} - x_n|` or
/// `|f(x_{n+1})|` drops below the tolerance; a linear function therefore
/// converges in a single step. Divergence is not suppressed: every step is
/// recorded, and running out of iterations yields an unconverged result.
/// Once at least one step is recorded, a step that leaves the finite range
/// or a failed evaluation of `f` at the new iterate also ends the run
/// unconverged with the trace intact.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Errors
///
/// [`MathError::DerivativeZero`] when `|f'(x)| < DERIVATIVE_FLOOR`, and
/// [`MathError::Evaluation`] when the first step leaves the finite range.
///
/// # Example
///
/// ```rust
/// use numlab_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| Ok(x * x - 2.0);
/// let df = |x: f64| Ok(2.0 * x);
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::new(1e-12, 50)).unwrap();
/// assert!((result.root.unwrap() - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<RootResult<NewtonStep>>
where
    F: Fn(f64) -> MathResult<f64>,
    DF: Fn(f64) -> MathResult<f64>,
{
    config.validate()?;
    if !initial_guess.is_finite() {
        return Err(MathError::invalid_input(format!(
            "initial guess must be finite, got {initial_guess}"
        )));
    }

    let tol = config.tolerance;
    let mut x = initial_guess;
    let mut fx = f(x)?;

    if fx.abs() < tol {
        log::debug!("newton: initial guess {x} is already a root");
        return Ok(RootResult::converged(x, Vec::new()));
    }

    let mut steps = Vec::new();

    for iteration in 1..=config.max_iterations {
        let dfx = df(x)?;

        // Check for zero derivative
        if dfx.abs() < DERIVATIVE_FLOOR {
            return Err(MathError::DerivativeZero { x, derivative: dfx });
        }

        let x_next = x - fx / dfx;
        if !x_next.is_finite() {
            if steps.is_empty() {
                return Err(MathError::evaluation(format!(
                    "Newton step from x = {x} left the finite range"
                )));
            }
            log::debug!("newton diverged: step from x = {x} left the finite range");
            return Ok(RootResult::not_converged(steps));
        }

        let error = (x_next - x).abs();
        log::trace!("newton {iteration}: x = {x}, f = {fx}, f' = {dfx}, next = {x_next}");
        steps.push(NewtonStep {
            iteration,
            x,
            f_x: fx,
            df_x: dfx,
            x_next,
            error,
        });

        let f_next = match f(x_next) {
            Ok(value) if value.is_finite() => value,
            Ok(value) => {
                log::debug!("newton diverged: f({x_next}) = {value}");
                return Ok(RootResult::not_converged(steps));
            }
            Err(err) => {
                log::debug!("newton diverged: {err}");
                return Ok(RootResult::not_converged(steps));
            }
        };
        if error < tol || f_next.abs() < tol {
            log::debug!("newton converged to {x_next} after {iteration} iterations");
            return Ok(RootResult::converged(x_next, steps));
        }

        x = x_next;
        fx = f_next;
    }

    log::debug!(
        "newton did not converge in {} iterations",
        config.max_iterations
    );
    Ok(RootResult::not_converged(steps))
}
