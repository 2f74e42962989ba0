//! Usage statistics models.

use answer_core::types::{serialize_opt_timestamp, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Application name reported in [`ServiceStatus`].
pub const APP_NAME: &str = "answer";

/// DTO for recording one served request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUsageLog {
    pub path: String,
    pub status: i32,
    pub error: String,
}

/// Aggregates over the `usage_log` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UsageTotals {
    pub requests_count: i64,
    pub errors_count: i64,
    pub last_request_at: Option<Timestamp>,
}

/// Usage statistics returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub app: String,
    pub host: String,
    pub requests_count: i64,
    pub errors_count: i64,
    #[serde(serialize_with = "serialize_opt_timestamp")]
    pub last_request_at: Option<Timestamp>,
}

impl ServiceStatus {
    pub fn new(host: &str, totals: UsageTotals) -> Self {
        Self {
            app: APP_NAME.to_string(),
            host: host.to_string(),
            requests_count: totals.requests_count,
            errors_count: totals.errors_count,
            last_request_at: totals.last_request_at,
        }
    }
}
