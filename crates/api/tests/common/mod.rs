#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use answer_api::config::ServerConfig;
use answer_api::router::build_app_router;
use answer_api::state::AppState;
use answer_core::delete::{DeleteOutcome, DeleteTarget};
use answer_core::pagination::Page;
use answer_core::types::DbId;
use answer_db::models::answer::{Answer, CreateAnswer, ListSubject};
use answer_db::models::usage::{CreateUsageLog, ServiceStatus, UsageTotals};
use answer_db::store::{AnswerStore, UsageStats};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// In-memory answer store
// ---------------------------------------------------------------------------

/// How the in-memory store misbehaves, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    Normal,
    /// Every call fails as if the pool were exhausted.
    Unavailable,
    /// The row disappears between the promote lookup and the update.
    DeleteBeforePromote,
}

struct Rows {
    answers: Vec<Answer>,
    next_id: DbId,
}

/// `AnswerStore` double backed by a `Vec`, with Postgres-like semantics for
/// ids, ordering and paging.
pub struct MemoryStore {
    rows: Mutex<Rows>,
    mode: StoreMode,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_mode(StoreMode::Normal)
    }

    pub fn with_mode(mode: StoreMode) -> Self {
        Self {
            rows: Mutex::new(Rows {
                answers: Vec::new(),
                next_id: 1,
            }),
            mode,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().answers.len()
    }

    pub fn get(&self, id: DbId) -> Option<Answer> {
        let rows = self.rows.lock().unwrap();
        rows.answers.iter().find(|a| a.id == id).cloned()
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        match self.mode {
            StoreMode::Unavailable => Err(sqlx::Error::PoolTimedOut),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl AnswerStore for MemoryStore {
    async fn insert(&self, input: &CreateAnswer) -> Result<Answer, sqlx::Error> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let answer = Answer {
            id: rows.next_id,
            question_id: input.question_id,
            content: input.content.clone(),
            author_id: input.author_id,
            author_nickname: input.author_nickname.clone(),
            is_best: false,
            created: chrono::Utc::now(),
        };
        rows.next_id += 1;
        rows.answers.push(answer.clone());
        Ok(answer)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        self.check()?;
        Ok(self.get(id))
    }

    async fn list(&self, subject: ListSubject, page: Page) -> Result<Vec<Answer>, sqlx::Error> {
        self.check()?;
        let page = page.clamped();
        let rows = self.rows.lock().unwrap();
        let mut matching: Vec<Answer> = rows
            .answers
            .iter()
            .filter(|a| match subject {
                ListSubject::Author(id) => a.author_id == id,
                ListSubject::Question(id) => a.question_id == id,
            })
            .cloned()
            .collect();
        matching.sort_by_key(|a| a.id);
        Ok(matching
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .collect())
    }

    async fn mark_best(&self, id: DbId) -> Result<u64, sqlx::Error> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if self.mode == StoreMode::DeleteBeforePromote {
            rows.answers.retain(|a| a.id != id);
        }
        let mut affected = 0;
        for answer in rows.answers.iter_mut().filter(|a| a.id == id) {
            answer.is_best = true;
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete(&self, target: DeleteTarget) -> Result<DeleteOutcome, sqlx::Error> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.answers.len();
        rows.answers.retain(|a| match target {
            DeleteTarget::Id(id) => a.id != id,
            DeleteTarget::Question(id) => a.question_id != id,
            DeleteTarget::Author(id) => a.author_id != id,
        });
        let removed = (before - rows.answers.len()) as u64;
        Ok(DeleteOutcome::for_target(&target, removed))
    }
}

// ---------------------------------------------------------------------------
// Recording usage stats
// ---------------------------------------------------------------------------

/// `UsageStats` double that keeps every logged entry in memory.
#[derive(Default)]
pub struct RecordingStats {
    entries: Mutex<Vec<CreateUsageLog>>,
    failing: bool,
}

impl RecordingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose writes always fail.
    pub fn failing() -> Self {
        Self {
            entries: Mutex::default(),
            failing: true,
        }
    }

    pub fn entries(&self) -> Vec<CreateUsageLog> {
        self.entries.lock().unwrap().clone()
    }

    /// Wait for background usage tasks to land at least `count` entries.
    pub async fn wait_for(&self, count: usize) -> Vec<CreateUsageLog> {
        for _ in 0..100 {
            let entries = self.entries();
            if entries.len() >= count {
                return entries;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.entries()
    }
}

#[async_trait]
impl UsageStats for RecordingStats {
    async fn log_stat(&self, entry: &CreateUsageLog) -> Result<(), sqlx::Error> {
        if self.failing {
            return Err(sqlx::Error::PoolClosed);
        }
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }

    async fn usage_statistic(&self, host: &str) -> Result<ServiceStatus, sqlx::Error> {
        if self.failing {
            return Err(sqlx::Error::PoolClosed);
        }
        let entries = self.entries.lock().unwrap();
        let totals = UsageTotals {
            requests_count: entries.len() as i64,
            errors_count: entries.iter().filter(|e| e.status >= 400).count() as i64,
            last_request_at: None,
        };
        Ok(ServiceStatus::new(host, totals))
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
    }
}

/// Build the full application router over the given doubles, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<MemoryStore>, stats: Arc<RecordingStats>) -> Router {
    let state = AppState::new(test_config(), store, stats);
    build_app_router(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("host", "localhost:8081");
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
