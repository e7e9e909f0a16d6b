//! # Numlab Math
//!
//! Numerical analysis engine for the Numlab teaching service.
//!
//! This crate provides:
//!
//! - **Expression**: Safe parsing and evaluation of single-variable formulas
//! - **Solvers**: Root finding (Bisection, Newton-Raphson) with iteration traces
//! - **Regression**: Linear and quadratic least-squares fitting
//! - **Linear Algebra**: Gaussian elimination, Jacobi and Gauss-Seidel
//! - **Allocation**: Proportional budget distribution
//!
//! ## Design Philosophy
//!
//! - **Pure**: Every operation is a deterministic function of its inputs
//! - **Observable**: Iterative methods return every step they took
//! - **Honest**: Non-convergence is a result, not a silently wrong answer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::uninlined_format_args)]

pub mod allocation;
pub mod error;
pub mod expression;
pub mod linear_algebra;
pub mod regression;
pub mod solvers;
pub mod trace;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::allocation::{allocate, AllocationResult};
    pub use crate::error::{MathError, MathResult};
    pub use crate::expression::Expression;
    pub use crate::linear_algebra::{
        solve, IterativeConfig, IterativeMethod, IterativeResult, LinearSystem,
        LinearSystemResult, SolveMethod,
    };
    pub use crate::regression::{fit, fit_with_options, FitOptions, RegressionModel, RegressionResult};
    pub use crate::solvers::{bisection, newton_raphson, RootResult, SolverConfig};
    pub use crate::trace::{BisectionStep, Cell, IterationRecord, NewtonStep, TraceRow, VectorStep};
}

pub use error::{MathError, MathResult};
pub use nalgebra;
