//! Delete-target resolution and per-path delete outcomes.
//!
//! A delete request may populate several keys; exactly one is used, chosen
//! in the fixed order `id`, `question_id`, `author_id`. Lower-precedence keys
//! are ignored rather than rejected.

use std::fmt;

use crate::error::CoreError;
use crate::types::DbId;

/// The single criterion a delete request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    /// Remove one answer by its id.
    Id(DbId),
    /// Remove every answer attached to a question.
    Question(DbId),
    /// Remove every answer written by an author.
    Author(DbId),
}

impl DeleteTarget {
    /// Pick the delete criterion from a partially-populated request.
    ///
    /// Fails with [`CoreError::FieldsRequired`] when all three keys are zero.
    pub fn resolve(id: DbId, question_id: DbId, author_id: DbId) -> Result<Self, CoreError> {
        if id != 0 {
            Ok(Self::Id(id))
        } else if question_id != 0 {
            Ok(Self::Question(question_id))
        } else if author_id != 0 {
            Ok(Self::Author(author_id))
        } else {
            Err(CoreError::FieldsRequired)
        }
    }

    /// Column name of the selected key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Id(_) => "id",
            Self::Question(_) => "question_id",
            Self::Author(_) => "author_id",
        }
    }

    /// Value of the selected key.
    pub fn value(&self) -> DbId {
        match *self {
            Self::Id(v) | Self::Question(v) | Self::Author(v) => v,
        }
    }
}

impl fmt::Display for DeleteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key(), self.value())
    }
}

/// Result of running a delete, tagged by the kind of path that produced it.
///
/// Point deletes must confirm the row existed; bulk deletes are cleanup and
/// succeed even when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Delete by id.
    Point { removed: u64 },
    /// Delete by question or author.
    Bulk { removed: u64 },
}

impl DeleteOutcome {
    /// Tag a row count with the path that produced it.
    pub fn for_target(target: &DeleteTarget, removed: u64) -> Self {
        match target {
            DeleteTarget::Id(_) => Self::Point { removed },
            DeleteTarget::Question(_) | DeleteTarget::Author(_) => Self::Bulk { removed },
        }
    }

    /// Number of rows removed, or [`CoreError::NoDataToDelete`] for a point
    /// delete that matched nothing.
    pub fn into_result(self) -> Result<u64, CoreError> {
        match self {
            Self::Point { removed: 0 } => Err(CoreError::NoDataToDelete),
            Self::Point { removed } | Self::Bulk { removed } => Ok(removed),
        }
    }
}
