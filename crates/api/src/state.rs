use std::sync::Arc;

use answer_db::store::{AnswerStore, UsageStats};

use crate::config::ServerConfig;
use crate::usage::UsageRecorder;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup and never mutated afterwards. Cheaply cloneable:
/// every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Answer storage handed to the dispatcher.
    pub answers: Arc<dyn AnswerStore>,
    /// Usage statistics lookup for the index endpoint.
    pub stats: Arc<dyn UsageStats>,
    /// Fire-and-forget usage logging.
    pub usage: UsageRecorder,
}

impl AppState {
    pub fn new(
        config: ServerConfig,
        answers: Arc<dyn AnswerStore>,
        stats: Arc<dyn UsageStats>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            answers,
            usage: UsageRecorder::new(Arc::clone(&stats)),
            stats,
        }
    }
}
