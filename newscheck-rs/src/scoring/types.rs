//! Scoring types and data structures

use serde::{Deserialize, Serialize};

/// Weight of the classifier confidence in the truth score
pub const ML_WEIGHT: f64 = 0.4;
/// Weight of each heuristic term in the truth score
pub const HEURISTIC_WEIGHT: f64 = 0.15;
/// Truth score strictly above which news is likely real
pub const REAL_THRESHOLD: f64 = 60.0;

/// Homepages suggested when a submission looks fabricated
pub const REFERENCE_LINKS: [&str; 2] = ["https://www.bbc.com", "https://www.thehindu.com"];

/// One user submission
#[derive(Debug, Clone, Default)]
pub struct Submission {
    /// News text, required
    pub text: String,
    /// Source URL
    pub url: Option<String>,
    /// Author name; collected but not used by any signal
    pub author: Option<String>,
    /// Raw uploaded image bytes
    pub image: Option<Vec<u8>>,
}

impl Submission {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_image(mut self, image: Vec<u8>) -> Self {
        self.image = Some(image);
        self
    }

    /// Whether the text is empty once trimmed
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Raw per-signal scores, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalScores {
    /// Max class probability of the text classifier
    pub ml_confidence: f64,
    pub source: f64,
    pub fact: f64,
    pub emotion: f64,
    pub linguistic: f64,
    /// Shown in the breakdown but not part of the truth score
    pub image: f64,
}

impl SignalScores {
    /// Weighted blend scaled to a percentage. `image` is left out.
    pub fn truth_score(&self) -> f64 {
        (ML_WEIGHT * self.ml_confidence
            + HEURISTIC_WEIGHT * self.source
            + HEURISTIC_WEIGHT * self.fact
            + HEURISTIC_WEIGHT * (1.0 - self.emotion)
            + HEURISTIC_WEIGHT * (1.0 - self.linguistic))
            * 100.0
    }

    /// Display rows in fixed order, scaled to percentages
    pub fn breakdown(&self) -> Vec<SignalBreakdown> {
        [
            ("Text ML", self.ml_confidence),
            ("Source", self.source),
            ("Fact", self.fact),
            ("Emotion Manipulation", self.emotion),
            ("Linguistic Manipulation", self.linguistic),
            ("Image Reliability", self.image),
        ]
        .into_iter()
        .map(|(name, score)| SignalBreakdown {
            name: name.to_string(),
            percentage: score * 100.0,
        })
        .collect()
    }
}

/// Final classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictLabel {
    LikelyReal,
    LikelyFake,
}

impl VerdictLabel {
    /// Strict comparison: exactly 60 is fake
    pub fn from_truth_score(percentage: f64) -> Self {
        if percentage > REAL_THRESHOLD {
            VerdictLabel::LikelyReal
        } else {
            VerdictLabel::LikelyFake
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictLabel::LikelyReal => "REAL",
            VerdictLabel::LikelyFake => "FAKE",
        }
    }
}

/// A named breakdown row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalBreakdown {
    pub name: String,
    pub percentage: f64,
}

/// Scoring result for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Truth score in [0, 100]
    pub percentage: f64,
    pub label: VerdictLabel,
    pub breakdown: Vec<SignalBreakdown>,
}

impl Verdict {
    pub fn from_scores(scores: &SignalScores) -> Self {
        let percentage = scores.truth_score();
        Self {
            percentage,
            label: VerdictLabel::from_truth_score(percentage),
            breakdown: scores.breakdown(),
        }
    }

    pub fn is_real(&self) -> bool {
        self.label == VerdictLabel::LikelyReal
    }
}
