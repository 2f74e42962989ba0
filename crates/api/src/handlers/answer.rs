//! Handlers for the answer resource.
//!
//! Each handler extracts raw inputs, runs the matching [`dispatch`]
//! operation against the shared store, and hands the result to
//! [`respond`], which writes the envelope and records usage.

use answer_core::error::CoreError;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::Response;

use crate::dispatch;
use crate::error::AppResult;
use crate::query::{parse_answer_key, parse_list_subject, ListingParams};
use crate::response::respond;
use crate::state::AppState;

/// PUT /answer
///
/// Create an answer. Responds 201 with the stored entity.
pub async fn create_answer(State(state): State<AppState>, uri: Uri, body: Bytes) -> Response {
    tracing::debug!(path = uri.path(), "Answer question");

    let result = dispatch::create(state.answers.as_ref(), &body).await;
    respond(&state.usage, uri.path(), result, StatusCode::CREATED)
}

/// GET /answer/id{id}
///
/// Fetch one answer.
pub async fn get_answer(
    State(state): State<AppState>,
    uri: Uri,
    Path(key): Path<String>,
) -> Response {
    tracing::debug!(path = uri.path(), "Get one answer");

    let result = match parse_answer_key(&key) {
        Some(id) => dispatch::fetch_one(state.answers.as_ref(), id).await,
        None => Err(CoreError::NoResult.into()),
    };
    respond(&state.usage, uri.path(), result, StatusCode::OK)
}

/// GET /answers/author{id}?limit=&offset=
/// GET /answers/question{id}?page=&conp=
///
/// List answers for an author or a question. An undecodable query string
/// is treated as empty.
pub async fn list_answers(
    State(state): State<AppState>,
    uri: Uri,
    Path(subject): Path<String>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    tracing::debug!(path = uri.path(), "Get answers");

    let params = match query {
        Ok(Query(pairs)) => ListingParams::from_pairs(pairs),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Ignoring query string");
            ListingParams::default()
        }
    };

    let result: AppResult<_> = match parse_list_subject(&subject) {
        Some(subject) => {
            let page = params.page_for(subject);
            dispatch::fetch_many(state.answers.as_ref(), subject, page).await
        }
        None => Err(CoreError::NoResult.into()),
    };
    respond(&state.usage, uri.path(), result, StatusCode::OK)
}

/// PATCH /best
///
/// Mark an answer as best.
pub async fn mark_best(State(state): State<AppState>, uri: Uri, body: Bytes) -> Response {
    tracing::debug!(path = uri.path(), "Mark answer as best");

    let result = dispatch::promote(state.answers.as_ref(), &body).await;
    respond(&state.usage, uri.path(), result, StatusCode::OK)
}

/// DELETE /delete
///
/// Delete by `id`, `question_id` or `author_id` (first present wins).
pub async fn delete_answers(State(state): State<AppState>, uri: Uri, body: Bytes) -> Response {
    tracing::debug!(path = uri.path(), "Delete answer");

    let result = dispatch::delete(state.answers.as_ref(), &body).await;
    respond(&state.usage, uri.path(), result, StatusCode::OK)
}
