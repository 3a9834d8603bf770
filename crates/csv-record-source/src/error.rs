use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while opening or reading a delimited file.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The input path does not exist.
    #[error("data does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O or decoding failure inside the CSV reader.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
