//! Per-operation field requirements for inbound answers.
//!
//! Each rule is a pure function of the decoded request. A zero id counts as
//! absent, matching how the JSON decoder fills in missing numeric fields.

use crate::error::CoreError;
use crate::types::DbId;

/// Check that a create request carries everything needed to insert a row.
///
/// `content` must be present and non-empty, and both `author_id` and
/// `question_id` must be non-zero. `author_nickname` is optional and is not
/// inspected.
pub fn validate_create(
    content: Option<&str>,
    author_id: DbId,
    question_id: DbId,
) -> Result<(), CoreError> {
    let has_content = content.is_some_and(|c| !c.is_empty());
    if !has_content || author_id == 0 || question_id == 0 {
        return Err(CoreError::FieldsRequired);
    }
    Ok(())
}

/// Check that a promote request names the answer to promote.
///
/// Only `id` matters; any other field in the body is ignored.
pub fn validate_promote(id: DbId) -> Result<(), CoreError> {
    if id == 0 {
        return Err(CoreError::FieldsRequired);
    }
    Ok(())
}
