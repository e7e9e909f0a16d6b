//! Iteration traces.
//!
//! Each algorithm family records its own step type. [`IterationRecord`] tags
//! them into one variant, and [`TraceRow`] gives every step a fixed column
//! set so a caller can render any trace as a uniform table.

use serde::Serialize;

/// One bisection step over the interval `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BisectionStep {
    /// 1-based iteration index.
    pub iteration: u32,
    /// Lower bound before the step.
    pub a: f64,
    /// Upper bound before the step.
    pub b: f64,
    /// Midpoint `(a + b) / 2`.
    pub midpoint: f64,
    /// Function value at the midpoint.
    pub f_midpoint: f64,
    /// Half-width of the interval.
    pub error: f64,
}

/// One Newton-Raphson step from `x` to `x_next`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NewtonStep {
    /// 1-based iteration index.
    pub iteration: u32,
    /// Current estimate.
    pub x: f64,
    /// f(x).
    pub f_x: f64,
    /// f'(x).
    pub df_x: f64,
    /// Next estimate.
    pub x_next: f64,
    /// `|x_next - x|`.
    pub error: f64,
}

/// One sweep of an iterative linear solver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorStep {
    /// 1-based iteration index.
    pub iteration: u32,
    /// Full solution estimate after the sweep.
    pub estimate: Vec<f64>,
    /// Max-norm of the change from the previous estimate.
    pub error: f64,
    /// Euclidean norm of `A·x - b`.
    pub residual: f64,
}

/// Step of any algorithm family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IterationRecord {
    /// Bisection step.
    Bisection(BisectionStep),
    /// Newton-Raphson step.
    Newton(NewtonStep),
    /// Iterative linear solver step.
    Vector(VectorStep),
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Iteration counter.
    Index(u32),
    /// Scalar value.
    Scalar(f64),
    /// Vector value.
    Vector(Vec<f64>),
}

/// Uniform tabular view of a trace step.
pub trait TraceRow {
    /// Column names, identical for every step of the same type.
    const COLUMNS: &'static [&'static str];

    /// 1-based iteration index.
    fn iteration(&self) -> u32;

    /// Non-negative error measure of the step.
    fn error(&self) -> f64;

    /// Cells in [`Self::COLUMNS`] order.
    fn cells(&self) -> Vec<Cell>;
}

impl TraceRow for BisectionStep {
    const COLUMNS: &'static [&'static str] = &["iteration", "a", "b", "midpoint", "f_midpoint", "error"];

    fn iteration(&self) -> u32 {
        self.iteration
    }

    fn error(&self) -> f64 {
        self.error
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Index(self.iteration),
            Cell::Scalar(self.a),
            Cell::Scalar(self.b),
            Cell::Scalar(self.midpoint),
            Cell::Scalar(self.f_midpoint),
            Cell::Scalar(self.error),
        ]
    }
}

impl TraceRow for NewtonStep {
    const COLUMNS: &'static [&'static str] = &["iteration", "x", "f_x", "df_x", "x_next", "error"];

    fn iteration(&self) -> u32 {
        self.iteration
    }

    fn error(&self) -> f64 {
        self.error
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Index(self.iteration),
            Cell::Scalar(self.x),
            Cell::Scalar(self.f_x),
            Cell::Scalar(self.df_x),
            Cell::Scalar(self.x_next),
            Cell::Scalar(self.error),
        ]
    }
}

impl TraceRow for VectorStep {
    const COLUMNS: &'static [&'static str] = &["iteration", "estimate", "error", "residual"];

    fn iteration(&self) -> u32 {
        self.iteration
    }

    fn error(&self) -> f64 {
        self.error
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Index(self.iteration),
            Cell::Vector(self.estimate.clone()),
            Cell::Scalar(self.error),
            Cell::Scalar(self.residual),
        ]
    }
}

impl IterationRecord {
    /// Column names of the wrapped step type.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::Bisection(_) => BisectionStep::COLUMNS,
            Self::Newton(_) => NewtonStep::COLUMNS,
            Self::Vector(_) => VectorStep::COLUMNS,
        }
    }

    /// Cells of the wrapped step.
    pub fn cells(&self) -> Vec<Cell> {
        match self {
            Self::Bisection(step) => step.cells(),
            Self::Newton(step) => step.cells(),
            Self::Vector(step) => step.cells(),
        }
    }

    /// Iteration index of the wrapped step.
    pub fn iteration(&self) -> u32 {
        match self {
            Self::Bisection(step) => step.iteration,
            Self::Newton(step) => step.iteration,
            Self::Vector(step) => step.iteration,
        }
    }

    /// Error measure of the wrapped step.
    pub fn error(&self) -> f64 {
        match self {
            Self::Bisection(step) => step.error,
            Self::Newton(step) => step.error,
            Self::Vector(step) => step.error,
        }
    }
}

impl From<BisectionStep> for IterationRecord {
    fn from(step: BisectionStep) -> Self {
        Self::Bisection(step)
    }
}

impl From<NewtonStep> for IterationRecord {
    fn from(step: NewtonStep) -> Self {
        Self::Newton(step)
    }
}

impl From<VectorStep> for IterationRecord {
    fn from(step: VectorStep) -> Self {
        Self::Vector(step)
    }
}
