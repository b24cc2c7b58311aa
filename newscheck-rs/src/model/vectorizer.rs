//! TF-IDF vectorizer
//!
//! Maps raw text to an L2-normalised sparse vector over a vocabulary learned
//! from the training corpus. Feature indices follow sorted term order, so a
//! fitted vectorizer must always be paired with the classifier trained on
//! its output.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use super::stop_words::is_stop_word;
use crate::error::{NewsError, Result};

/// Sparse feature vector as `(feature index, value)` pairs sorted by index
pub type SparseVector = Vec<(usize, f64)>;

/// Fitted TF-IDF vectorizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term -> feature index
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature index
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Learn vocabulary and idf weights.
    ///
    /// Terms appearing in more than `max_df` (a proportion in (0, 1]) of the
    /// documents are dropped.
    pub fn fit<S: AsRef<str>>(documents: &[S], max_df: f64) -> Result<Self> {
        if documents.is_empty() {
            return Err(NewsError::Dataset("cannot fit vectorizer on zero documents".to_string()));
        }

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique: HashSet<String> = tokenize(doc.as_ref()).into_iter().collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(NewsError::Dataset(
                "empty vocabulary; documents only contain stop words".to_string(),
            ));
        }

        let n_docs = documents.len() as f64;
        let max_doc_count = max_df * n_docs;

        // BTreeMap iteration gives sorted term order
        let kept: Vec<(String, usize)> = document_frequency
            .into_iter()
            .filter(|(_, df)| (*df as f64) <= max_doc_count)
            .collect();

        if kept.is_empty() {
            return Err(NewsError::Dataset(
                "after pruning, no terms remain; try a higher max_df".to_string(),
            ));
        }

        let mut vocabulary = HashMap::with_capacity(kept.len());
        let mut idf = Vec::with_capacity(kept.len());
        for (index, (term, df)) in kept.into_iter().enumerate() {
            idf.push(((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Ok(Self { vocabulary, idf })
    }

    /// Fit, then transform the same documents
    pub fn fit_transform<S: AsRef<str>>(
        documents: &[S],
        max_df: f64,
    ) -> Result<(Self, Vec<SparseVector>)> {
        let vectorizer = Self::fit(documents, max_df)?;
        let matrix = documents
            .iter()
            .map(|doc| vectorizer.transform(doc.as_ref()))
            .collect();
        Ok((vectorizer, matrix))
    }

    /// Transform one document. Terms outside the vocabulary are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();
        vector.sort_unstable_by_key(|(index, _)| *index);

        let norm = vector.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, v) in vector.iter_mut() {
                *v /= norm;
            }
        }

        vector
    }

    /// Number of features produced by `transform`
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Feature index of a term, if it is in the vocabulary
    pub fn feature_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}

/// Lowercase and split into word tokens of at least two characters,
/// dropping English stop words
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|s| s.chars().count() >= 2)
        .filter(|s| !is_stop_word(s))
        .map(str::to_string)
        .collect()
}
