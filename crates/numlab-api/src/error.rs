//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use numlab_math::MathError;
use serde::Serialize;
use thiserror::Error;

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Numerical engine rejected the input.
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error body details.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    /// HTTP status and stable error code.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            ApiError::Math(err) => (math_status(err), err.kind()),
        }
    }

    /// Serializable body for this error.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.status_and_code().1.to_string(),
            message: self.to_string(),
        }
    }
}

/// Malformed input is 400; well-formed input with no answer is 422.
fn math_status(err: &MathError) -> StatusCode {
    match err {
        MathError::InvalidExpression { .. }
        | MathError::DimensionMismatch { .. }
        | MathError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        MathError::Evaluation { .. }
        | MathError::InvalidInterval { .. }
        | MathError::DerivativeZero { .. }
        | MathError::SingularMatrix { .. }
        | MathError::ZeroDiagonal { .. }
        | MathError::InsufficientData { .. }
        | MathError::InvalidWeights { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        if status.is_client_error() {
            tracing::debug!("request rejected: {self}");
        }

        let body = Json(ErrorResponse { error: self.body() });

        (status, body).into_response()
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
