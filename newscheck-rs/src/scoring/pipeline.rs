//! Scoring pipeline
//!
//! Runs the text classifier and every heuristic signal over one submission
//! and blends them into a [`Verdict`]. Purely computational; the classifier
//! is shared read-only across submissions.

use std::sync::Arc;
use tracing::{debug, info};

use super::types::*;
use crate::error::{NewsError, Result};
use crate::model::TextClassifier;
use crate::signals;

/// Scoring pipeline
#[derive(Clone)]
pub struct ScoringPipeline {
    classifier: Arc<dyn TextClassifier>,
}

impl ScoringPipeline {
    /// Create a pipeline around an already loaded classifier
    pub fn new(classifier: Arc<dyn TextClassifier>) -> Self {
        Self { classifier }
    }

    /// Compute every raw signal for a submission
    pub fn signals(&self, submission: &Submission) -> Result<SignalScores> {
        if submission.is_blank() {
            return Err(NewsError::EmptyText);
        }

        let text = submission.text.as_str();
        Ok(SignalScores {
            ml_confidence: self.classifier.confidence(text),
            source: signals::source_score(submission.url.as_deref()),
            fact: signals::fact_score(text),
            emotion: signals::emotion_score(text),
            linguistic: signals::linguistic_score(text),
            image: signals::image_score(submission.image.as_deref())?,
        })
    }

    /// Score a submission
    pub fn score(&self, submission: &Submission) -> Result<Verdict> {
        let scores = self.signals(submission)?;
        debug!(?scores, author = ?submission.author, "Signals computed");

        let verdict = Verdict::from_scores(&scores);
        info!(
            "Verdict {} with truth score {:.2}%",
            verdict.label.as_str(),
            verdict.percentage
        );

        Ok(verdict)
    }
}
