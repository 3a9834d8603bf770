//! Error types shared by all sink implementations.

use thiserror::Error;

/// Boxed cause carried by connection and write errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while resetting or writing to a destination.
#[derive(Error, Debug)]
pub enum SinkError {
    /// Could not establish the connection or client.
    #[error("failed to connect to destination")]
    Connect(#[source] BoxError),

    /// Destination reset or batch submission failed.
    #[error("write to destination failed")]
    Write(#[source] BoxError),

    /// Releasing the connection or client failed.
    #[error("failed to release destination connection")]
    Close(#[source] BoxError),

    /// `insert_batch` was called before `prepare`.
    #[error("sink used before prepare")]
    NotPrepared,

    /// The sink has already released its connection.
    #[error("sink already closed")]
    Closed,
}

impl SinkError {
    pub fn connect(err: impl Into<BoxError>) -> Self {
        SinkError::Connect(err.into())
    }

    pub fn write(err: impl Into<BoxError>) -> Self {
        SinkError::Write(err.into())
    }

    pub fn close(err: impl Into<BoxError>) -> Self {
        SinkError::Close(err.into())
    }
}
