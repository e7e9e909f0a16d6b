//! Common DTO types.

use numlab_math::trace::{Cell, TraceRow};
use serde::Serialize;

/// Largest `max_iterations` a request may ask for.
pub const MAX_ITERATIONS_LIMIT: u32 = 10_000;

/// Iteration trace rendered as a table: every row has one cell per column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl TraceTable {
    /// Table over steps of a single algorithm.
    pub fn from_steps<S: TraceRow>(steps: &[S]) -> Self {
        Self {
            columns: S::COLUMNS.to_vec(),
            rows: steps.iter().map(TraceRow::cells).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Rejects iteration budgets the server will not run.
pub fn check_max_iterations(max_iterations: Option<u32>) -> crate::error::ApiResult<()> {
    match max_iterations {
        Some(n) if n > MAX_ITERATIONS_LIMIT => Err(crate::error::ApiError::Validation(format!(
            "max_iterations must be at most {MAX_ITERATIONS_LIMIT}, got {n}"
        ))),
        _ => Ok(()),
    }
}
