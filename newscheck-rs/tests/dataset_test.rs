use newscheck_rs::dataset::{load_labeled_pair, merge_files, ArticleLabel};
use std::fs;
use tempfile::TempDir;

const FAKE_CSV: &str = "title,text,subject,date\n\
Shocking claim,\"You won't BELIEVE this!!!!\",News,2017\n\
Secret plot,\"They hide it, again\",politics,2017\n\
Miracle cure,Doctors hate it,News,2016\n";

const REAL_CSV: &str = "title,text,subject,date\n\
Budget passed,The government report was confirmed,politicsNews,2017\n\
Election results,Official count verified,worldnews,2017\n";

fn write_inputs(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let fake = dir.path().join("Fake.csv");
    let real = dir.path().join("True.csv");
    fs::write(&fake, FAKE_CSV).unwrap();
    fs::write(&real, REAL_CSV).unwrap();
    (fake, real)
}

#[test]
fn test_load_pair_orders_fake_first() {
    let dir = TempDir::new().unwrap();
    let (fake, real) = write_inputs(&dir);

    let articles = load_labeled_pair(&fake, &real).unwrap();
    assert_eq!(articles.len(), 5);
    assert!(articles[..3].iter().all(|a| a.label == ArticleLabel::Fake));
    assert!(articles[3..].iter().all(|a| a.label == ArticleLabel::Real));
    assert_eq!(articles[1].text, "They hide it, again");
}

#[test]
fn test_merge_row_count_and_columns() {
    let dir = TempDir::new().unwrap();
    let (fake, real) = write_inputs(&dir);
    let output = dir.path().join("news.csv");

    let rows = merge_files(&fake, &real, &output).unwrap();
    assert_eq!(rows, 5);

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, ["title", "text", "label"]);

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 5);
    assert_eq!(&records[0][2], "FAKE");
    assert_eq!(&records[4][2], "REAL");
    assert_eq!(&records[0][1], "You won't BELIEVE this!!!!");
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let (fake, _) = write_inputs(&dir);
    let missing = dir.path().join("nope.csv");
    assert!(load_labeled_pair(&fake, &missing).is_err());
}

#[test]
fn test_missing_text_column_is_fatal() {
    let dir = TempDir::new().unwrap();
    let (fake, _) = write_inputs(&dir);
    let bad = dir.path().join("bad.csv");
    fs::write(&bad, "title,body\nA,B\n").unwrap();

    let output = dir.path().join("news.csv");
    assert!(merge_files(&fake, &bad, &output).is_err());
}
