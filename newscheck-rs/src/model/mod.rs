//! Text classifier artifact
//!
//! A fitted [`TfidfVectorizer`] and [`LogisticRegression`] persisted and
//! loaded as a pair.

pub mod classifier;
pub mod stop_words;
pub mod training;
pub mod vectorizer;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::info;

use crate::error::{NewsError, Result};

pub use classifier::{LogisticRegression, LogisticRegressionParams};
pub use training::{train, TrainingConfig, TrainingReport};
pub use vectorizer::{SparseVector, TfidfVectorizer};

/// Text classifier seam used by the scoring pipeline
pub trait TextClassifier: Send + Sync {
    /// Class probability distribution for a raw text
    fn predict_proba(&self, text: &str) -> Vec<f64>;

    /// Confidence in the predicted class (max class probability),
    /// regardless of which class is favoured
    fn confidence(&self, text: &str) -> f64 {
        self.predict_proba(text)
            .into_iter()
            .fold(0.0, f64::max)
    }
}

/// Vectorizer and classifier fitted together
#[derive(Debug, Clone)]
pub struct TextModel {
    vectorizer: TfidfVectorizer,
    classifier: LogisticRegression,
}

impl TextModel {
    /// Pair a vectorizer with a classifier, checking feature dimensions match
    pub fn new(vectorizer: TfidfVectorizer, classifier: LogisticRegression) -> Result<Self> {
        if vectorizer.vocabulary_size() != classifier.n_features() {
            return Err(NewsError::Artifact(format!(
                "vectorizer has {} features but classifier expects {}",
                vectorizer.vocabulary_size(),
                classifier.n_features()
            )));
        }
        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Load both artifacts from disk
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(model_path: P, vectorizer_path: Q) -> Result<Self> {
        let classifier: LogisticRegression = read_artifact(model_path.as_ref())?;
        let vectorizer: TfidfVectorizer = read_artifact(vectorizer_path.as_ref())?;
        let model = Self::new(vectorizer, classifier)?;

        info!(
            "Loaded text model ({} features) from {}",
            model.vectorizer.vocabulary_size(),
            model_path.as_ref().display()
        );
        Ok(model)
    }

    /// Write both artifacts to disk
    pub fn save<P: AsRef<Path>, Q: AsRef<Path>>(&self, model_path: P, vectorizer_path: Q) -> Result<()> {
        write_artifact(model_path.as_ref(), &self.classifier)?;
        write_artifact(vectorizer_path.as_ref(), &self.vectorizer)?;
        Ok(())
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &LogisticRegression {
        &self.classifier
    }
}

impl TextClassifier for TextModel {
    fn predict_proba(&self, text: &str) -> Vec<f64> {
        let features = self.vectorizer.transform(text);
        self.classifier.predict_proba(&features).to_vec()
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .map_err(|e| NewsError::Artifact(format!("cannot open {}: {}", path.display(), e)))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| NewsError::Artifact(format!("cannot parse {}: {}", path.display(), e)))
}

fn write_artifact<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), value)?;
    Ok(())
}
