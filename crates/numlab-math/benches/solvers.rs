//! Benchmarks for the numlab-math algorithms.
//!
//! Run with: cargo bench -p numlab-math

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use numlab_math::expression::Expression;
use numlab_math::linear_algebra::{solve, IterativeConfig, LinearSystem, SolveMethod};
use numlab_math::regression::{fit, RegressionModel};
use numlab_math::solvers::{bisection, newton_raphson, SolverConfig};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Diagonally dominant tridiagonal system of size `n`.
fn create_test_system(n: usize) -> LinearSystem {
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| match i.abs_diff(j) {
                    0 => 4.0,
                    1 => -1.0,
                    _ => 0.0,
                })
                .collect()
        })
        .collect();
    let rhs = (0..n).map(|i| (i + 1) as f64).collect();
    LinearSystem::new(rows, rhs).unwrap()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_expression(c: &mut Criterion) {
    c.bench_function("expression_parse", |b| {
        b.iter(|| Expression::parse(black_box("0.001*x^3 - 0.5*x^2 + 120*x - 6000")))
    });

    let f = Expression::parse("0.001*x^3 - 0.5*x^2 + 120*x - 6000").unwrap();
    c.bench_function("expression_evaluate", |b| b.iter(|| f.evaluate(black_box(65.0))));
}

fn bench_root_finding(c: &mut Criterion) {
    let f = Expression::parse("0.001*x^3 - 0.5*x^2 + 120*x - 6000").unwrap();
    let df = Expression::parse("0.003*x^2 - x + 120").unwrap();
    let config = SolverConfig::new(1e-8, 100);

    let mut group = c.benchmark_group("root_finding");
    group.bench_function("bisection", |b| {
        b.iter(|| bisection(f.as_fn(), black_box(0.0), black_box(100.0), &config))
    });
    group.bench_function("newton", |b| {
        b.iter(|| newton_raphson(f.as_fn(), df.as_fn(), black_box(50.0), &config))
    });
    group.finish();
}

fn bench_regression(c: &mut Criterion) {
    let xs: Vec<f64> = (2000..2025).map(f64::from).collect();
    let ys: Vec<f64> = xs.iter().map(|x| 0.3 * (x - 2000.0).powi(2) + 150.0).collect();

    let mut group = c.benchmark_group("regression");
    for model in [RegressionModel::Linear, RegressionModel::Quadratic] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{model:?}")), &model, |b, &m| {
            b.iter(|| fit(black_box(&xs), black_box(&ys), m, 2025.0))
        });
    }
    group.finish();
}

fn bench_linear_systems(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_systems");
    for n in [3, 8, 16] {
        let system = create_test_system(n);
        group.bench_with_input(BenchmarkId::new("gaussian", n), &system, |b, s| {
            b.iter(|| solve(s, &SolveMethod::Gaussian))
        });
        let method = SolveMethod::GaussSeidel(IterativeConfig::new(1e-10, 500));
        group.bench_with_input(BenchmarkId::new("gauss_seidel", n), &system, |b, s| {
            b.iter(|| solve(s, &method))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_expression,
    bench_root_finding,
    bench_regression,
    bench_linear_systems
);
criterion_main!(benches);
