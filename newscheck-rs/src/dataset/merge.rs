//! Combined `title,text,label` CSV export

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::{load_labeled_pair, LabeledArticle};
use crate::error::Result;

#[derive(Serialize)]
struct MergedRow<'a> {
    title: &'a str,
    text: &'a str,
    label: &'static str,
}

/// Write articles as a headed CSV with exactly `title,text,label`.
/// Returns the number of rows written.
pub fn write_merged<W: Write>(articles: &[LabeledArticle], writer: W) -> Result<usize> {
    // Header is emitted explicitly so an empty export still carries it
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(["title", "text", "label"])?;
    for article in articles {
        csv_writer.serialize(MergedRow {
            title: &article.title,
            text: &article.text,
            label: article.label.as_str(),
        })?;
    }
    csv_writer.flush()?;

    Ok(articles.len())
}

/// Merge the fabricated and genuine CSVs into one file at `output`
pub fn merge_files<P, Q, R>(fake_path: P, real_path: Q, output: R) -> Result<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let articles = load_labeled_pair(fake_path, real_path)?;
    let file = File::create(output)?;
    write_merged(&articles, file)
}
