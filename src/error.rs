//! Errors raised at the file and configuration boundary. Normalization
//! itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input table lacks a column the evaluation needs.
    #[error("missing required column `{0}`")]
    MissingColumn(String),

    #[error("dictionary error: {0}")]
    Dictionary(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, EvalError>;
