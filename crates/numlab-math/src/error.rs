//! Error types for numerical operations.

use thiserror::Error;

/// A specialized Result type for numerical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during numerical operations.
///
/// Non-convergence of an iterative method is not an error: solvers report it
/// through the `converged` flag of their result together with the partial
/// trace.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Expression text uses syntax or names outside the allowed vocabulary.
    #[error("Invalid expression at position {position}: {reason}")]
    InvalidExpression {
        /// Byte offset in the source text where the problem was found.
        position: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Evaluation hit a domain error or produced a non-finite value.
    #[error("Evaluation failed: {reason}")]
    Evaluation {
        /// Description of the failure.
        reason: String,
    },

    /// Bisection interval does not bracket a sign change.
    #[error("Invalid interval: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have the same sign")]
    InvalidInterval {
        /// Lower bound of the interval.
        a: f64,
        /// Upper bound of the interval.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// Newton step would divide by a (near) zero derivative.
    #[error("Derivative too close to zero at x = {x}: f'(x) = {derivative:.2e}")]
    DerivativeZero {
        /// Point where the derivative vanished.
        x: f64,
        /// The near-zero derivative value.
        derivative: f64,
    },

    /// Matrix has no unique solution.
    #[error("Singular matrix: no usable pivot in column {column}")]
    SingularMatrix {
        /// Elimination column without a usable pivot.
        column: usize,
    },

    /// Iterative scheme cannot divide by a zero diagonal entry.
    #[error("Zero diagonal entry A[{row},{row}]: iterative method cannot proceed")]
    ZeroDiagonal {
        /// Row with the zero diagonal entry.
        row: usize,
    },

    /// Sizes of the inputs do not agree.
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Which input was inconsistent.
        context: String,
        /// Expected size.
        expected: usize,
        /// Actual size.
        actual: usize,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Weights cannot be used for proportional allocation.
    #[error("Invalid weights: {reason}")]
    InvalidWeights {
        /// Description of the problem.
        reason: String,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates an invalid expression error.
    #[must_use]
    pub fn invalid_expression(position: usize, reason: impl Into<String>) -> Self {
        Self::InvalidExpression {
            position,
            reason: reason.into(),
        }
    }

    /// Creates an evaluation error.
    #[must_use]
    pub fn evaluation(reason: impl Into<String>) -> Self {
        Self::Evaluation {
            reason: reason.into(),
        }
    }

    /// Creates a dimension mismatch error.
    #[must_use]
    pub fn dimension_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Creates an invalid weights error.
    #[must_use]
    pub fn invalid_weights(reason: impl Into<String>) -> Self {
        Self::InvalidWeights {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidExpression { .. } => "INVALID_EXPRESSION",
            Self::Evaluation { .. } => "EVALUATION_ERROR",
            Self::InvalidInterval { .. } => "INVALID_INTERVAL",
            Self::DerivativeZero { .. } => "DERIVATIVE_ZERO",
            Self::SingularMatrix { .. } => "SINGULAR_MATRIX",
            Self::ZeroDiagonal { .. } => "ZERO_DIAGONAL",
            Self::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            Self::InsufficientData { .. } => "INSUFFICIENT_DATA",
            Self::InvalidWeights { .. } => "INVALID_WEIGHTS",
            Self::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}
