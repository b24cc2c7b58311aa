//! Dataset merge job
//!
//! Combines the fabricated/genuine article CSVs into a single
//! `title,text,label` file.
//!
//! # Usage
//!
//! ```bash
//! news-merge --fake Fake.csv --real True.csv --output news.csv
//! ```

use clap::Parser;
use newscheck_rs::config::LoggingConfig;
use newscheck_rs::dataset::merge_files;
use newscheck_rs::logging::init_tracing;
use tracing::info;

#[derive(Parser)]
#[command(name = "news-merge")]
#[command(about = "Merge labeled news CSVs into one file", long_about = None)]
struct Cli {
    /// CSV of fabricated articles
    #[arg(long, default_value = "Fake.csv")]
    fake: String,

    /// CSV of genuine articles
    #[arg(long, default_value = "True.csv")]
    real: String,

    /// Merged output CSV
    #[arg(short, long, default_value = "news.csv")]
    output: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&LoggingConfig {
        level: "info".to_string(),
        format: "pretty".to_string(),
    });

    let rows = merge_files(&cli.fake, &cli.real, &cli.output)?;
    info!("{} created with {} rows", cli.output, rows);

    Ok(())
}
