//! Repository for the `answers` table.

use answer_core::pagination::Page;
use answer_core::types::DbId;
use sqlx::PgPool;

use crate::models::answer::{Answer, CreateAnswer};

/// Column list for `answers` queries.
const COLUMNS: &str = "\
    id, question_id, content, author_id, author_nickname, is_best, created";

/// Provides CRUD operations for answers.
pub struct AnswerRepo;

impl AnswerRepo {
    /// Insert a new answer. The database assigns `id`, `created` and
    /// `is_best = false`.
    pub async fn create(pool: &PgPool, input: &CreateAnswer) -> Result<Answer, sqlx::Error> {
        let query = format!(
            "INSERT INTO answers (question_id, content, author_id, author_nickname) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(input.question_id)
            .bind(&input.content)
            .bind(input.author_id)
            .bind(input.author_nickname.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Find an answer by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE id = $1");
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an author's answers, ordered by id ascending.
    pub async fn list_by_author(
        pool: &PgPool,
        author_id: DbId,
        page: Page,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        Self::list_by_column(pool, "author_id", author_id, page).await
    }

    /// List a question's answers, ordered by id ascending.
    pub async fn list_by_question(
        pool: &PgPool,
        question_id: DbId,
        page: Page,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        Self::list_by_column(pool, "question_id", question_id, page).await
    }

    /// `column` is always one of the static names above, never client input.
    async fn list_by_column(
        pool: &PgPool,
        column: &'static str,
        value: DbId,
        page: Page,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        let page = page.clamped();
        tracing::debug!(column, value, limit = page.limit, offset = page.offset, "Listing answers");

        let query = format!(
            "SELECT {COLUMNS} FROM answers \
             WHERE {column} = $1 \
             ORDER BY id ASC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(value)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(pool)
            .await
    }

    /// Set `is_best = true`. Returns the number of rows affected, which is
    /// `0` if the answer no longer exists.
    pub async fn mark_best(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE answers SET is_best = true WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete one answer by id. Returns the number of rows removed.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every answer by an author. Returns the number of rows removed.
    pub async fn delete_by_author(pool: &PgPool, author_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM answers WHERE author_id = $1")
            .bind(author_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every answer to a question. Returns the number of rows removed.
    pub async fn delete_by_question(pool: &PgPool, question_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM answers WHERE question_id = $1")
            .bind(question_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
