//! Labeled news article datasets
//!
//! Reads the fabricated/genuine CSV pair used by the training and merge
//! jobs. Each file needs `title` and `text` header columns; anything else
//! is ignored.

pub mod merge;

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::error::{NewsError, Result};

pub use merge::{merge_files, write_merged};

/// Ground-truth label of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArticleLabel {
    Fake,
    Real,
}

impl ArticleLabel {
    /// Numeric class used for training: fabricated 0, genuine 1
    pub fn class_id(self) -> u8 {
        match self {
            ArticleLabel::Fake => 0,
            ArticleLabel::Real => 1,
        }
    }

    /// Label string used in the merged export
    pub fn as_str(self) -> &'static str {
        match self {
            ArticleLabel::Fake => "FAKE",
            ArticleLabel::Real => "REAL",
        }
    }
}

/// A single labeled article
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledArticle {
    pub title: String,
    pub text: String,
    pub label: ArticleLabel,
}

impl LabeledArticle {
    /// Title and text joined by a single space, casing untouched
    pub fn content(&self) -> String {
        format!("{} {}", self.title, self.text)
    }
}

/// Read articles from a CSV file, tagging every row with `label`
pub fn read_articles<P: AsRef<Path>>(path: P, label: ArticleLabel) -> Result<Vec<LabeledArticle>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| NewsError::Dataset(format!("cannot open {}: {}", path.display(), e)))?;
    read_articles_from(file, label)
        .map_err(|e| NewsError::Dataset(format!("{}: {}", path.display(), e)))
}

/// Read articles from any CSV source
pub fn read_articles_from<R: Read>(reader: R, label: ArticleLabel) -> Result<Vec<LabeledArticle>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| NewsError::Dataset(format!("missing column '{}'", name)))
    };
    let title_idx = column("title")?;
    let text_idx = column("text")?;

    let mut articles = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        // Empty cells stay empty; no placeholder token reaches the vocabulary
        articles.push(LabeledArticle {
            title: record.get(title_idx).unwrap_or_default().to_string(),
            text: record.get(text_idx).unwrap_or_default().to_string(),
            label,
        });
    }

    Ok(articles)
}

/// Load the fabricated and genuine sets, fabricated rows first
pub fn load_labeled_pair<P: AsRef<Path>, Q: AsRef<Path>>(
    fake_path: P,
    real_path: Q,
) -> Result<Vec<LabeledArticle>> {
    let mut articles = read_articles(fake_path, ArticleLabel::Fake)?;
    let real = read_articles(real_path, ArticleLabel::Real)?;

    info!("Fake news: {}", articles.len());
    info!("Real news: {}", real.len());

    articles.extend(real);
    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_ignores_extra_columns() {
        let csv = "title,text,subject,date\nA,Body one,politics,2017\nB,\"Body, two\",world,2018\n";
        let articles = read_articles_from(csv.as_bytes(), ArticleLabel::Real).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[1].text, "Body, two");
        assert_eq!(articles[1].label, ArticleLabel::Real);
    }

    #[test]
    fn test_missing_column_is_error() {
        let csv = "title,subject\nA,politics\n";
        let result = read_articles_from(csv.as_bytes(), ArticleLabel::Fake);
        assert!(matches!(result, Err(NewsError::Dataset(_))));
    }

    #[test]
    fn test_empty_cell_becomes_empty_string() {
        let csv = "title,text\n,Only body\n";
        let articles = read_articles_from(csv.as_bytes(), ArticleLabel::Fake).unwrap();
        assert_eq!(articles[0].title, "");
        assert_eq!(articles[0].content(), " Only body");
        assert!(!articles[0].content().contains("nan"));
    }

    #[test]
    fn test_label_encodings() {
        assert_eq!(ArticleLabel::Fake.class_id(), 0);
        assert_eq!(ArticleLabel::Real.class_id(), 1);
        assert_eq!(ArticleLabel::Fake.as_str(), "FAKE");
        assert_eq!(ArticleLabel::Real.as_str(), "REAL");
    }
}
