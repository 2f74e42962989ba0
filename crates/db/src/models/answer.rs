//! Answer entity and request DTOs.

use answer_core::best::BestState;
use answer_core::error::CoreError;
use answer_core::types::{serialize_timestamp, DbId, Timestamp};
use answer_core::validation::validate_create;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `answers` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Answer {
    pub id: DbId,
    pub question_id: DbId,
    pub content: String,
    pub author_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_nickname: Option<String>,
    pub is_best: bool,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created: Timestamp,
}

impl Answer {
    pub fn best_state(&self) -> BestState {
        BestState::from(self.is_best)
    }

    /// Return the answer with its best flag replaced by `state`.
    pub fn with_best_state(mut self, state: BestState) -> Self {
        self.is_best = state.is_best();
        self
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// A decoded request body. Every operation that takes a body parses it as
/// this full shape; which fields matter depends on the operation.
///
/// Missing or `null` numeric fields decode as `0` and are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnswerInput {
    #[serde(deserialize_with = "null_as_zero")]
    pub id: DbId,
    #[serde(deserialize_with = "null_as_zero")]
    pub question_id: DbId,
    pub content: Option<String>,
    #[serde(deserialize_with = "null_as_zero")]
    pub author_id: DbId,
    pub author_nickname: Option<String>,
    pub is_best: Option<bool>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<DbId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DbId>::deserialize(deserializer)?.unwrap_or(0))
}

/// Validated insert payload. `id`, `created` and `is_best` come from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAnswer {
    pub question_id: DbId,
    pub content: String,
    pub author_id: DbId,
    pub author_nickname: Option<String>,
}

impl TryFrom<AnswerInput> for CreateAnswer {
    type Error = CoreError;

    fn try_from(input: AnswerInput) -> Result<Self, Self::Error> {
        validate_create(input.content.as_deref(), input.author_id, input.question_id)?;
        Ok(Self {
            question_id: input.question_id,
            content: input.content.unwrap_or_default(),
            author_id: input.author_id,
            author_nickname: input.author_nickname,
        })
    }
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Which foreign key a listing is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSubject {
    Author(DbId),
    Question(DbId),
}
