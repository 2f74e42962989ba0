//! Path and query parameter parsing for answer endpoints.
//!
//! Ids are embedded in path segments (`id7`, `author7`, `question7`), so
//! routes capture the whole segment and the prefix is stripped here.

use answer_core::pagination::Page;
use answer_core::types::DbId;
use answer_db::models::answer::ListSubject;

/// Query parameters accepted by the listing endpoints.
///
/// Author listings page with `limit`/`offset`; question listings page with
/// `page`/`conp`. Values stay raw strings so a non-numeric value degrades to
/// `0` instead of rejecting the request.
#[derive(Debug, Default)]
pub struct ListingParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub page: Option<String>,
    pub conp: Option<String>,
}

impl ListingParams {
    /// Collect decoded query pairs. The first value of a repeated key wins;
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut params.limit,
                "offset" => &mut params.offset,
                "page" => &mut params.page,
                "conp" => &mut params.conp,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    /// Resolve the pagination idiom that applies to `subject`.
    pub fn page_for(&self, subject: ListSubject) -> Page {
        match subject {
            ListSubject::Author(_) => {
                Page::from_limit_offset(present(&self.limit), present(&self.offset))
            }
            ListSubject::Question(_) => {
                Page::from_page(present(&self.page), present(&self.conp))
            }
        }
    }
}

/// An empty query value counts as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Parse an id the way the path parser always has: garbage is `0`.
fn lenient_id(raw: &str) -> DbId {
    raw.parse().unwrap_or(0)
}

/// Parse `id<n>`. Returns `None` when the prefix is missing.
pub fn parse_answer_key(segment: &str) -> Option<DbId> {
    segment.strip_prefix("id").map(lenient_id)
}

/// Parse `author<n>` or `question<n>`. Returns `None` for any other prefix.
pub fn parse_list_subject(segment: &str) -> Option<ListSubject> {
    if let Some(raw) = segment.strip_prefix("author") {
        Some(ListSubject::Author(lenient_id(raw)))
    } else {
        segment
            .strip_prefix("question")
            .map(|raw| ListSubject::Question(lenient_id(raw)))
    }
}
