//! Fire-and-forget usage logging.

use std::sync::Arc;

use answer_db::models::usage::CreateUsageLog;
use answer_db::store::UsageStats;

/// Records served requests without holding up the response.
///
/// Each call spawns a task; failures are logged and dropped.
#[derive(Clone)]
pub struct UsageRecorder {
    stats: Arc<dyn UsageStats>,
}

impl UsageRecorder {
    pub fn new(stats: Arc<dyn UsageStats>) -> Self {
        Self { stats }
    }

    /// Queue a usage record for `path`. Returns immediately.
    pub fn record(&self, path: &str, status: u16, error: &str) {
        let stats = Arc::clone(&self.stats);
        let entry = CreateUsageLog {
            path: path.to_string(),
            status: i32::from(status),
            error: error.to_string(),
        };

        tokio::spawn(async move {
            if let Err(e) = stats.log_stat(&entry).await {
                tracing::warn!(error = %e, path = %entry.path, "Failed to store usage stat");
            }
        });
    }
}
