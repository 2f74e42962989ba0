pub mod answer;
pub mod stats;
