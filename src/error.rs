use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockoutError {
    #[error("Branch catalog error: {0}")]
    Catalog(String),

    #[error("Expansion error: {0}")]
    Expansion(String),

    #[error("Aggregation error: {0}")]
    Aggregation(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StockoutError>;
