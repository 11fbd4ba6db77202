use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library.
#[derive(Debug, Error)]
pub enum BikeshareError {
    /// The city's CSV file is not present in the data directory.
    #[error("dataset file not found: {}", path.display())]
    DatasetNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV data: {0}")]
    Csv(#[from] csv::Error),

    /// Standard input reached EOF while a prompt was waiting for an answer.
    #[error("input closed before a valid answer was given")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, BikeshareError>;
