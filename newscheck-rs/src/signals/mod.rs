//! Heuristic signals
//!
//! Stateless functions scoring one facet of a submission in [0, 1].

pub mod emotion;
pub mod fact;
pub mod image_quality;
pub mod linguistic;
pub mod source;

pub use emotion::{emotion_score, sentiment, Sentiment};
pub use fact::fact_score;
pub use image_quality::image_score;
pub use linguistic::linguistic_score;
pub use source::{source_score, TRUSTED_SOURCES};
