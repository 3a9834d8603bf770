//! Top-level error type for a load.

use bulk_sink::SinkError;
use csv_record_source::SourceError;
use std::path::PathBuf;
use thiserror::Error;

use crate::loader::LoaderState;

/// Errors that abort a load.
///
/// None of these are retried; they propagate to the caller, which is still
/// responsible for closing the loader.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The input file does not exist.
    #[error("data does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// The file name has nothing before its first `.`, so no table or
    /// collection name can be derived from it.
    #[error("cannot derive a destination name from {}", .0.display())]
    EmptyDestination(PathBuf),

    /// `--source` named a sink kind other than `mysql` or `mongo`.
    #[error("unsupported data source type: {0}")]
    UnsupportedSink(String),

    /// `--delimiter` is not a single-byte character.
    #[error("delimiter must be an ASCII character, got {0:?}")]
    InvalidDelimiter(char),

    /// Reading the input file failed.
    #[error("failed to read source file")]
    Source(#[source] SourceError),

    /// Resetting the destination or writing a batch failed.
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// An operation was called in a state that does not allow it.
    #[error("cannot {op} while loader is {state:?}")]
    InvalidState {
        op: &'static str,
        state: LoaderState,
    },
}

impl From<SourceError> for LoadError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound(path) => LoadError::NotFound(path),
            other => LoadError::Source(other),
        }
    }
}
