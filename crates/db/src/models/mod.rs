//! Row models and request DTOs.

pub mod answer;
pub mod usage;
