use axum::routing::{delete, get, patch, put};
use axum::Router;

use crate::handlers::{answer, stats};
use crate::state::AppState;

/// Build the answer service route tree.
///
/// ```text
/// GET    /                          service_stats (not recorded)
/// PUT    /answer                    create_answer
/// GET    /answer/id{id}             get_answer
/// GET    /answers/author{id}        list_answers (?limit=&offset=)
/// GET    /answers/question{id}      list_answers (?page=&conp=)
/// PATCH  /best                      mark_best
/// DELETE /delete                    delete_answers
/// ```
///
/// Ids share a path segment with a literal prefix, so the segment is
/// captured whole and split in [`crate::query`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(stats::service_stats))
        .route("/answer", put(answer::create_answer))
        .route("/answer/{key}", get(answer::get_answer))
        .route("/answers/{subject}", get(answer::list_answers))
        .route("/best", patch(answer::mark_best))
        .route("/delete", delete(answer::delete_answers))
}
