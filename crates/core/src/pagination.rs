//! Pagination normalization.
//!
//! Clients page through listings with one of two idioms:
//!
//! - `?limit=&offset=` (answers by author)
//! - `?page=&conp=` (answers by question, `conp` = count on page)
//!
//! Both resolve to a single [`Page`]. When the client omits either half of
//! its pair the result is [`Page::UNSET`], and defaults are only applied at
//! the store boundary by [`Page::clamped`].

/// Page size used when the caller supplies none (or a non-positive one).
pub const DEFAULT_LIMIT: i64 = 20;

/// Sentinel meaning "apply defaults".
pub const UNSET: i64 = -1;

/// A resolved `(limit, offset)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    /// No client parameters: both values carry the [`UNSET`] sentinel.
    pub const UNSET: Page = Page {
        limit: UNSET,
        offset: UNSET,
    };

    /// Adapter for the `limit`/`offset` idiom.
    pub fn from_limit_offset(limit: Option<&str>, offset: Option<&str>) -> Self {
        Self::normalize(limit.zip(offset), |limit, offset| (limit, offset))
    }

    /// Adapter for the `page`/`conp` idiom. Pages are 1-based.
    pub fn from_page(page: Option<&str>, count_per_page: Option<&str>) -> Self {
        Self::normalize(page.zip(count_per_page), |page, count| {
            (count, page.saturating_sub(1).saturating_mul(count))
        })
    }

    /// Shared path for both adapters: parse the raw pair if the client sent
    /// both halves, then map it to `(limit, offset)`.
    fn normalize(
        raw: Option<(&str, &str)>,
        to_limit_offset: impl Fn(i64, i64) -> (i64, i64),
    ) -> Self {
        match raw {
            Some((a, b)) => {
                let (limit, offset) = to_limit_offset(lenient_int(a), lenient_int(b));
                Self { limit, offset }
            }
            None => Self::UNSET,
        }
    }

    /// Apply store-side defaults: a negative offset becomes `0`, a
    /// non-positive limit becomes [`DEFAULT_LIMIT`].
    pub fn clamped(self) -> Self {
        Self {
            limit: if self.limit <= 0 { DEFAULT_LIMIT } else { self.limit },
            offset: self.offset.max(0),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::UNSET
    }
}

/// Parse a query value as an integer, treating garbage as `0`.
fn lenient_int(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}
