//! Operation dispatcher.
//!
//! Each operation runs `decode -> validate -> resolve -> store` against the
//! injected [`AnswerStore`] and returns a domain outcome. Shaping that
//! outcome into a response is left to [`crate::response`].
//!
//! A zero-row write is the only signal that a concurrent request got there
//! first; it maps to `NoDataToUpdate` / `NoDataToDelete` rather than a store
//! failure.

use answer_core::delete::DeleteTarget;
use answer_core::error::CoreError;
use answer_core::pagination::Page;
use answer_core::types::DbId;
use answer_core::validation::validate_promote;
use answer_db::models::answer::{Answer, AnswerInput, CreateAnswer, ListSubject};
use answer_db::store::AnswerStore;

use crate::error::{AppError, AppResult};

/// Parse a request body as a full answer.
fn decode(body: &[u8]) -> AppResult<AnswerInput> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "Broken body");
        AppError::from(e)
    })
}

/// Create a new answer. The store assigns `id`, `created` and `is_best`.
pub async fn create(store: &dyn AnswerStore, body: &[u8]) -> AppResult<Answer> {
    let input = decode(body)?;

    let new_answer = CreateAnswer::try_from(input).inspect_err(|e| {
        tracing::warn!(error = %e, "Validation error");
    })?;

    let answer = store.insert(&new_answer).await?;

    tracing::info!(
        answer_id = answer.id,
        question_id = answer.question_id,
        author_id = answer.author_id,
        "New answer added"
    );
    Ok(answer)
}

/// Fetch one answer by id.
pub async fn fetch_one(store: &dyn AnswerStore, id: DbId) -> AppResult<Answer> {
    let answer = store.find_by_id(id).await?.ok_or(CoreError::NoResult)?;

    tracing::debug!(answer_id = id, "Answer found");
    Ok(answer)
}

/// List answers for an author or question, ordered by id ascending.
///
/// Never fails for "no matches": that is an empty list.
pub async fn fetch_many(
    store: &dyn AnswerStore,
    subject: ListSubject,
    page: Page,
) -> AppResult<Vec<Answer>> {
    let answers = store.list(subject, page).await?;

    tracing::debug!(?subject, count = answers.len(), "Answers listed");
    Ok(answers)
}

/// Mark an answer as best.
///
/// Re-promoting an answer that is already best succeeds. The returned entity
/// always reports `is_best = true`.
pub async fn promote(store: &dyn AnswerStore, body: &[u8]) -> AppResult<Answer> {
    let input = decode(body)?;

    validate_promote(input.id).inspect_err(|e| {
        tracing::warn!(error = %e, "Validation error");
    })?;

    let current = store
        .find_by_id(input.id)
        .await?
        .ok_or(CoreError::NoDataToUpdate)?;

    let affected = store.mark_best(input.id).await?;
    if affected != 1 {
        tracing::warn!(answer_id = input.id, affected, "Answer vanished before promotion");
        return Err(CoreError::NoDataToUpdate.into());
    }

    let promoted = current.best_state().promote();

    tracing::info!(answer_id = input.id, "Answer marked as best");
    Ok(current.with_best_state(promoted))
}

/// Delete by the highest-precedence key present in the body.
///
/// A delete by id must remove a row; deletes by question or author succeed
/// even if nothing matched.
pub async fn delete(store: &dyn AnswerStore, body: &[u8]) -> AppResult<()> {
    let input = decode(body)?;

    let target = DeleteTarget::resolve(input.id, input.question_id, input.author_id)
        .inspect_err(|e| {
            tracing::warn!(error = %e, "Validation error");
        })?;

    tracing::debug!(%target, "Removing answers");

    let removed = store.delete(target).await?.into_result()?;

    tracing::info!(%target, removed, "Answers removed");
    Ok(())
}
