use axum::extract::State;
use axum::http::header::HOST;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /
///
/// Usage statistics for the requesting host. Not itself recorded.
pub async fn service_stats(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let host = headers
        .get(HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();
    tracing::debug!(host, "Get service stats");

    let result = state.stats.usage_statistic(host).await.map_err(AppError::from);
    Envelope::from_result(result, StatusCode::OK).into_response()
}
