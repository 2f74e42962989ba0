//! Domain logic for the answer service.
//!
//! Everything here is pure: request validation, delete-target resolution,
//! pagination normalization and the one-way "best answer" transition. The
//! database and HTTP crates build on these without adding decisions of their
//! own.

pub mod best;
pub mod delete;
pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;
