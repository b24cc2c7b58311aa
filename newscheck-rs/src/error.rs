use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Model artifact error: {0}")]
    Artifact(String),

    #[error("News text is empty")]
    EmptyText,

    #[error("Could not read uploaded image: {0}")]
    InvalidImage(String),
}

pub type Result<T> = std::result::Result<T, NewsError>;
