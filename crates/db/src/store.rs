//! Capability traits the HTTP layer talks to, plus their Postgres
//! implementation.
//!
//! Handlers never see a pool directly. They get an `Arc<dyn AnswerStore>`
//! and an `Arc<dyn UsageStats>` from application state, which lets tests
//! substitute an in-memory double.

use answer_core::delete::{DeleteOutcome, DeleteTarget};
use answer_core::pagination::Page;
use answer_core::types::DbId;
use async_trait::async_trait;

use crate::models::answer::{Answer, CreateAnswer, ListSubject};
use crate::models::usage::{CreateUsageLog, ServiceStatus};
use crate::repositories::{AnswerRepo, UsageRepo};
use crate::DbPool;

/// Persistent answer storage.
#[async_trait]
pub trait AnswerStore: Send + Sync {
    /// Insert an answer and return it with store-assigned fields populated.
    async fn insert(&self, input: &CreateAnswer) -> Result<Answer, sqlx::Error>;

    /// Point lookup by id.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Answer>, sqlx::Error>;

    /// Range query ordered by id ascending. `page` is clamped by the store.
    async fn list(&self, subject: ListSubject, page: Page) -> Result<Vec<Answer>, sqlx::Error>;

    /// Set the best flag. Returns rows affected.
    async fn mark_best(&self, id: DbId) -> Result<u64, sqlx::Error>;

    /// Run the delete path selected by `target`.
    async fn delete(&self, target: DeleteTarget) -> Result<DeleteOutcome, sqlx::Error>;
}

/// Usage statistics sink and lookup.
#[async_trait]
pub trait UsageStats: Send + Sync {
    async fn log_stat(&self, entry: &CreateUsageLog) -> Result<(), sqlx::Error>;

    async fn usage_statistic(&self, host: &str) -> Result<ServiceStatus, sqlx::Error>;
}

/// Postgres-backed implementation of both capabilities.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl AnswerStore for PgStore {
    async fn insert(&self, input: &CreateAnswer) -> Result<Answer, sqlx::Error> {
        AnswerRepo::create(&self.pool, input).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        AnswerRepo::find_by_id(&self.pool, id).await
    }

    async fn list(&self, subject: ListSubject, page: Page) -> Result<Vec<Answer>, sqlx::Error> {
        match subject {
            ListSubject::Author(author_id) => {
                AnswerRepo::list_by_author(&self.pool, author_id, page).await
            }
            ListSubject::Question(question_id) => {
                AnswerRepo::list_by_question(&self.pool, question_id, page).await
            }
        }
    }

    async fn mark_best(&self, id: DbId) -> Result<u64, sqlx::Error> {
        AnswerRepo::mark_best(&self.pool, id).await
    }

    async fn delete(&self, target: DeleteTarget) -> Result<DeleteOutcome, sqlx::Error> {
        let removed = match target {
            DeleteTarget::Id(id) => AnswerRepo::delete_by_id(&self.pool, id).await?,
            DeleteTarget::Question(question_id) => {
                AnswerRepo::delete_by_question(&self.pool, question_id).await?
            }
            DeleteTarget::Author(author_id) => {
                AnswerRepo::delete_by_author(&self.pool, author_id).await?
            }
        };
        Ok(DeleteOutcome::for_target(&target, removed))
    }
}

#[async_trait]
impl UsageStats for PgStore {
    async fn log_stat(&self, entry: &CreateUsageLog) -> Result<(), sqlx::Error> {
        UsageRepo::insert(&self.pool, entry).await
    }

    async fn usage_statistic(&self, host: &str) -> Result<ServiceStatus, sqlx::Error> {
        let totals = UsageRepo::totals(&self.pool).await?;
        Ok(ServiceStatus::new(host, totals))
    }
}
