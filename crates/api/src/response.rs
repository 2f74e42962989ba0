//! Response envelope and the response/error mapper.
//!
//! Every answer endpoint replies with `{ "status": int, "error": string,
//! "data": any|null }`. The HTTP status code always equals `status`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::usage::UsageRecorder;

/// Standard `{ status, error, data }` response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: u16,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// A successful outcome carrying `data`.
    pub fn success(status: StatusCode, data: T) -> Self {
        Self {
            status: status.as_u16(),
            error: String::new(),
            data: Some(data),
        }
    }

    /// A failed outcome: status and message from `err`, no data.
    pub fn failure(err: &AppError) -> Self {
        Self {
            status: err.status().as_u16(),
            error: err.message(),
            data: None,
        }
    }

    /// Build the envelope for an operation result. `success_status` is used
    /// for `Ok` (200 for most operations, 201 for create).
    pub fn from_result(result: AppResult<T>, success_status: StatusCode) -> Self {
        match result {
            Ok(data) => Self::success(success_status, data),
            Err(err) => {
                tracing::debug!(error = %err, "Operation failed");
                Self::failure(&err)
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// Map an operation result to an enveloped response and record usage for
/// `path` in the background.
pub fn respond<T: Serialize>(
    usage: &UsageRecorder,
    path: &str,
    result: AppResult<T>,
    success_status: StatusCode,
) -> Response {
    let envelope = Envelope::from_result(result, success_status);
    tracing::debug!(status = envelope.status, path, "Sending response");

    usage.record(path, envelope.status, &envelope.error);

    envelope.into_response()
}
