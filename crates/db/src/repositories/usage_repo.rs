//! Repository for the `usage_log` table.

use sqlx::PgPool;

use crate::models::usage::{CreateUsageLog, UsageTotals};

/// Records served requests and aggregates them.
pub struct UsageRepo;

impl UsageRepo {
    /// Append one usage record.
    pub async fn insert(pool: &PgPool, entry: &CreateUsageLog) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO usage_log (path, status, error) VALUES ($1, $2, $3)")
            .bind(&entry.path)
            .bind(entry.status)
            .bind(&entry.error)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Totals across the whole log. Any status `>= 400` counts as an error.
    pub async fn totals(pool: &PgPool) -> Result<UsageTotals, sqlx::Error> {
        sqlx::query_as::<_, UsageTotals>(
            "SELECT \
                 COUNT(*) AS requests_count, \
                 COUNT(*) FILTER (WHERE status >= 400) AS errors_count, \
                 MAX(created_at) AS last_request_at \
             FROM usage_log",
        )
        .fetch_one(pool)
        .await
    }
}
