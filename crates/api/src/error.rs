use answer_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::response::Envelope;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the transport and store
/// failures that only exist at this layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `answer_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body was not valid JSON for an answer.
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status for this error.
    ///
    /// | Kind                         | Status |
    /// |------------------------------|--------|
    /// | `FieldsRequired`             | 400    |
    /// | `NoResult`                   | 404    |
    /// | `NoDataToUpdate`             | 404    |
    /// | `NoDataToDelete`             | 404    |
    /// | `sqlx::Error::RowNotFound`   | 404    |
    /// | malformed payload, other db  | 500    |
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::FieldsRequired) => StatusCode::BAD_REQUEST,
            AppError::Core(
                CoreError::NoResult | CoreError::NoDataToUpdate | CoreError::NoDataToDelete,
            ) => StatusCode::NOT_FOUND,
            AppError::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::MalformedPayload(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text placed in the envelope's `error` field.
    ///
    /// Store failures are logged in full and reported with a sanitized
    /// message.
    pub fn message(&self) -> String {
        match self {
            AppError::Core(core) => core.to_string(),
            AppError::Database(sqlx::Error::RowNotFound) => CoreError::NoResult.to_string(),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                "An internal error occurred".to_string()
            }
            AppError::MalformedPayload(err) => format!("malformed payload: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        Envelope::<()>::failure(&self).into_response()
    }
}
