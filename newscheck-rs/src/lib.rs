//! newscheck-rs: multi-signal fake news estimation
//!
//! Blends a TF-IDF + logistic regression text classifier with a handful of
//! heuristic signals into a single Truth Score, served through a web form.
//!
//! # Features
//!
//! - **Text classifier**: bag-of-words model trained offline from labeled CSVs
//! - **Heuristic signals**: emotional tone, shouting, source trust, image
//!   resolution and fact keywords
//! - **Web form**: verdict badge with a per-signal breakdown
//! - **Offline jobs**: `news-train` fits the model, `news-merge` exports a
//!   combined dataset
//!
//! # Example
//!
//! ```no_run
//! use newscheck_rs::model::TextModel;
//! use newscheck_rs::scoring::{ScoringPipeline, Submission};
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = TextModel::load("model.json", "vectorizer.json")?;
//!     let pipeline = ScoringPipeline::new(Arc::new(model));
//!
//!     let submission = Submission::new("Government report confirmed by officials")
//!         .with_url("https://www.bbc.com/news/world");
//!     let verdict = pipeline.score(&submission)?;
//!     println!("{:.2}% {:?}", verdict.percentage, verdict.label);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`dataset`]: Labeled CSV loading and merged export
//! - [`model`]: Vectorizer, classifier and training
//! - [`signals`]: Heuristic signal functions
//! - [`scoring`]: Scoring pipeline and verdict types
//! - [`api`]: Web form and JSON API

pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod model;
pub mod scoring;
pub mod signals;

// Re-export commonly used types
pub use config::Config;
pub use error::{NewsError, Result};
