//! Offline training job
//!
//! Fits the TF-IDF vectorizer and logistic regression classifier on the
//! fabricated/genuine article CSVs and writes both artifacts.
//!
//! # Usage
//!
//! ```bash
//! news-train --fake Fake.csv --real True.csv \
//!     --model-out model.json --vectorizer-out vectorizer.json
//! ```

use clap::Parser;
use newscheck_rs::config::LoggingConfig;
use newscheck_rs::dataset::load_labeled_pair;
use newscheck_rs::logging::init_tracing;
use newscheck_rs::model::{train, TrainingConfig};
use tracing::info;

#[derive(Parser)]
#[command(name = "news-train")]
#[command(about = "Train the fake news text classifier", long_about = None)]
struct Cli {
    /// CSV of fabricated articles
    #[arg(long, default_value = "Fake.csv")]
    fake: String,

    /// CSV of genuine articles
    #[arg(long, default_value = "True.csv")]
    real: String,

    /// Output path of the classifier artifact
    #[arg(long, default_value = "model.json")]
    model_out: String,

    /// Output path of the vectorizer artifact
    #[arg(long, default_value = "vectorizer.json")]
    vectorizer_out: String,

    /// Drop terms present in more than this share of documents
    #[arg(long, default_value_t = 0.7)]
    max_df: f64,

    /// Iteration cap for the classifier
    #[arg(long, default_value_t = 1000)]
    max_iter: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&LoggingConfig {
        level: "info".to_string(),
        format: "pretty".to_string(),
    });

    info!("Loading datasets...");
    let articles = load_labeled_pair(&cli.fake, &cli.real)?;

    let mut config = TrainingConfig {
        max_df: cli.max_df,
        ..Default::default()
    };
    config.classifier.max_iter = cli.max_iter;

    let report = train(&articles, &config)?;
    report.model.save(&cli.model_out, &cli.vectorizer_out)?;

    info!(
        "Training complete on {} documents ({} iterations). Saved {} and {}",
        report.documents, report.iterations, cli.model_out, cli.vectorizer_out
    );

    Ok(())
}
