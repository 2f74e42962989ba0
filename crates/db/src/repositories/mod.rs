//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod answer_repo;
pub mod usage_repo;

pub use answer_repo::AnswerRepo;
pub use usage_repo::UsageRepo;
