//! Offline fitting of the text model from labeled articles

use tracing::info;

use super::classifier::{LogisticRegression, LogisticRegressionParams};
use super::vectorizer::TfidfVectorizer;
use super::TextModel;
use crate::dataset::LabeledArticle;
use crate::error::Result;

/// Training configuration
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Drop terms present in more than this share of documents
    pub max_df: f64,
    pub classifier: LogisticRegressionParams,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_df: 0.7,
            classifier: LogisticRegressionParams::default(),
        }
    }
}

/// Outcome of a training run
#[derive(Debug)]
pub struct TrainingReport {
    pub model: TextModel,
    pub documents: usize,
    pub iterations: usize,
    /// Accuracy on the training set itself
    pub training_accuracy: f64,
}

/// Fit vectorizer and classifier on the given articles
pub fn train(articles: &[LabeledArticle], config: &TrainingConfig) -> Result<TrainingReport> {
    let contents: Vec<String> = articles.iter().map(LabeledArticle::content).collect();
    let labels: Vec<u8> = articles.iter().map(|a| a.label.class_id()).collect();

    let (vectorizer, matrix) = TfidfVectorizer::fit_transform(&contents, config.max_df)?;
    info!("Vocabulary size: {}", vectorizer.vocabulary_size());

    let classifier = LogisticRegression::fit(
        &matrix,
        &labels,
        vectorizer.vocabulary_size(),
        &config.classifier,
    )?;

    let correct = matrix
        .iter()
        .zip(&labels)
        .filter(|(x, y)| classifier.predict(x) == **y)
        .count();
    let training_accuracy = correct as f64 / articles.len() as f64;

    info!(
        "Classifier fitted in {} iterations, training accuracy {:.3}",
        classifier.n_iter, training_accuracy
    );

    Ok(TrainingReport {
        iterations: classifier.n_iter,
        documents: articles.len(),
        training_accuracy,
        model: TextModel::new(vectorizer, classifier)?,
    })
}
