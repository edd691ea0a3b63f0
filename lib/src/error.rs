use polars::error::PolarsError;
use std::io::Error as IoError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] IoError),

    #[error("{source_name} source is missing required column: {column}")]
    MissingColumn {
        source_name: &'static str,
        column: String,
    },

    #[error("{0} has a value score of zero, salary-to-value ratio is undefined")]
    ZeroValueScore(String),
}
