//! Property-based tests for the numerical invariants.
//!
//! These tests verify properties that should hold for any valid input:
//! - Allocations add up to the budget
//! - Bisection lands within tolerance of a bracketed root
//! - Traces are bounded by the iteration budget with non-negative errors
//! - Expression evaluation is deterministic
//! - Direct solutions satisfy the system

use std::collections::BTreeMap;

use approx::assert_relative_eq;
use proptest::prelude::*;

use numlab_math::prelude::*;

// =============================================================================
// ALLOCATION
// =============================================================================

proptest! {
    #[test]
    fn allocation_sums_to_budget(
        ws in prop::collection::vec(0.0f64..1_000.0, 1..12),
        budget in 0.0f64..1e9,
    ) {
        prop_assume!(ws.iter().sum::<f64>() > 1e-6);
        let weights: BTreeMap<String, f64> = ws
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("c{i}"), *w))
            .collect();

        let result = allocate(&weights, budget).unwrap();

        prop_assert!((result.allocated() - budget).abs() <= 1e-9 * budget.max(1.0));
        prop_assert_eq!(result.allocations.len(), weights.len());
    }
}

// =============================================================================
// ROOT FINDING
// =============================================================================

proptest! {
    #[test]
    fn bisection_finds_bracketed_root(
        root in -100.0f64..100.0,
        below in 0.5f64..50.0,
        above in 0.5f64..50.0,
    ) {
        let config = SolverConfig::new(1e-8, 100);
        let f = |x: f64| Ok(x - root);

        let result = bisection(f, root - below, root + above, &config).unwrap();

        prop_assert!(result.converged);
        prop_assert!((result.root.unwrap() - root).abs() < 1e-8);
    }

    #[test]
    fn bisection_trace_is_bounded(
        max_iterations in 1u32..40,
        shift in -0.9f64..0.9,
    ) {
        let config = SolverConfig::new(1e-12, max_iterations);
        let f = |x: f64| Ok(x * x * x - shift);

        let result = bisection(f, -1.0, 1.0, &config).unwrap();

        prop_assert!(result.steps.len() <= max_iterations as usize);
        prop_assert_eq!(result.iterations as usize, result.steps.len());
        prop_assert!(result.steps.iter().all(|s| s.error >= 0.0));
        for (i, step) in result.steps.iter().enumerate() {
            prop_assert_eq!(step.iteration as usize, i + 1);
        }
        prop_assert_eq!(result.converged, result.root.is_some());
    }

    #[test]
    fn newton_trace_is_bounded(
        x0 in 0.5f64..20.0,
        target in 1.0f64..100.0,
        max_iterations in 1u32..30,
    ) {
        let config = SolverConfig::new(1e-10, max_iterations);
        let f = |x: f64| Ok(x * x - target);
        let df = |x: f64| Ok(2.0 * x);

        let result = newton_raphson(f, df, x0, &config).unwrap();

        prop_assert!(result.steps.len() <= max_iterations as usize);
        prop_assert!(result.steps.iter().all(|s| s.error >= 0.0));
        if let Some(root) = result.root {
            prop_assert!((root - target.sqrt()).abs() < 1e-6);
        }
    }
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

proptest! {
    #[test]
    fn evaluation_is_deterministic(x in -1e3f64..1e3) {
        let expr = Expression::parse("3*x^2 - 2*x + sin(x) / 4").unwrap();

        let first = expr.evaluate(x).unwrap();
        let second = expr.evaluate(x).unwrap();

        prop_assert_eq!(first.to_bits(), second.to_bits());
        prop_assert!((first - (3.0 * x * x - 2.0 * x + x.sin() / 4.0)).abs() <= 1e-9 * first.abs().max(1.0));
    }

    #[test]
    fn constant_expression_ignores_x(c in -1e6f64..1e6, x in -1e6f64..1e6) {
        let expr = Expression::parse(&format!("({c})")).unwrap();

        prop_assert_eq!(expr.evaluate(x).unwrap(), c);
    }
}

// =============================================================================
// LINEAR SYSTEMS
// =============================================================================

proptest! {
    #[test]
    fn gaussian_solution_satisfies_system(
        entries in prop::collection::vec(-10.0f64..10.0, 9),
        rhs in prop::collection::vec(-10.0f64..10.0, 3),
    ) {
        // Boost the diagonal so the matrix is comfortably non-singular
        let rows: Vec<Vec<f64>> = (0..3)
            .map(|i| {
                (0..3)
                    .map(|j| if i == j { entries[i * 3 + j] + 40.0 } else { entries[i * 3 + j] })
                    .collect()
            })
            .collect();
        let system = LinearSystem::new(rows, rhs).unwrap();

        let result = solve(&system, &SolveMethod::Gaussian).unwrap();
        let x = nalgebra::DVector::from_column_slice(result.solution().unwrap());

        prop_assert!(system.residual_norm(&x) < 1e-9);
    }

    #[test]
    fn iterative_methods_agree_on_dominant_systems(
        entries in prop::collection::vec(-1.0f64..1.0, 9),
        rhs in prop::collection::vec(-10.0f64..10.0, 3),
    ) {
        let rows: Vec<Vec<f64>> = (0..3)
            .map(|i| {
                (0..3)
                    .map(|j| if i == j { 5.0 + entries[i * 3 + j] } else { entries[i * 3 + j] })
                    .collect()
            })
            .collect();
        let system = LinearSystem::new(rows, rhs).unwrap();
        let config = IterativeConfig::new(1e-12, 500);

        let direct = solve(&system, &SolveMethod::Gaussian).unwrap();
        let jacobi = solve(&system, &SolveMethod::Jacobi(config.clone())).unwrap();
        let seidel = solve(&system, &SolveMethod::GaussSeidel(config)).unwrap();

        let expected = direct.solution().unwrap();
        for result in [jacobi, seidel] {
            let x = result.solution().unwrap();
            for (a, b) in x.iter().zip(expected) {
                prop_assert!((a - b).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn diagonal_system_by_every_method() {
    let system = LinearSystem::new(vec![vec![2.0, 0.0], vec![0.0, 2.0]], vec![4.0, 6.0]).unwrap();
    let methods = [
        SolveMethod::Gaussian,
        SolveMethod::Jacobi(IterativeConfig::default()),
        SolveMethod::GaussSeidel(IterativeConfig::default()),
    ];

    for method in &methods {
        let result = solve(&system, method).unwrap();
        let x = result.solution().unwrap();
        assert_relative_eq!(x[0], 2.0, epsilon = 1e-9);
        assert_relative_eq!(x[1], 3.0, epsilon = 1e-9);
    }
}

#[test]
fn singular_system_is_rejected() {
    let system = LinearSystem::new(vec![vec![1.0, 1.0], vec![1.0, 1.0]], vec![2.0, 2.0]).unwrap();

    let result = solve(&system, &SolveMethod::Gaussian);

    assert!(matches!(result, Err(MathError::SingularMatrix { .. })));
}

#[test]
fn linear_regression_on_a_line_is_exact() {
    let xs = [2019.0, 2020.0, 2021.0, 2022.0, 2023.0];
    let ys: Vec<f64> = xs.iter().map(|x| 12.0 * (x - 2019.0) + 300.0).collect();

    let result = fit(&xs, &ys, RegressionModel::Linear, 2024.0).unwrap();

    assert_relative_eq!(result.prediction, 360.0, epsilon = 1e-8);
    assert!(result.mse < 1e-16);
    assert_relative_eq!(result.r_squared.unwrap(), 1.0, epsilon = 1e-12);
}
