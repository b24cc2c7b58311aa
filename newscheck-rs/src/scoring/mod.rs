//! Truth scoring
//!
//! Blends classifier confidence with heuristic signals into a verdict.

pub mod pipeline;
pub mod types;

pub use pipeline::ScoringPipeline;
pub use types::*;
