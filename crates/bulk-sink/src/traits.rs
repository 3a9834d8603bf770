//! BulkSink trait definition.

use crate::{Record, SinkError};

/// Trait for destinations that accept batched writes.
///
/// A sink owns its connection for the lifetime of one load. The loader
/// calls `prepare` exactly once, then `insert_batch` once per batch, and
/// finally `close`.
///
/// # Usage Pattern
///
/// ```ignore
/// sink.prepare("people", &["name".to_string(), "age".to_string()]).await?;
/// for batch in batches {
///     sink.insert_batch(&batch).await?;
/// }
/// sink.close().await?;
/// ```
#[async_trait::async_trait]
pub trait BulkSink: Send {
    /// Reset the destination named `destination`.
    ///
    /// Any existing table or collection with that name is dropped. Relational
    /// sinks then create a fresh table with one text column per field name.
    async fn prepare(&mut self, destination: &str, field_names: &[String])
        -> Result<(), SinkError>;

    /// Write every record of `batch` in a single bulk operation.
    ///
    /// An empty batch is accepted and performs no write.
    async fn insert_batch(&mut self, batch: &[Record]) -> Result<(), SinkError>;

    /// Release the underlying connection. Calling it again is a no-op.
    async fn close(&mut self) -> Result<(), SinkError>;
}
