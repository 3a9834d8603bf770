//! Bulk-write sink abstraction.
//!
//! This crate defines the `BulkSink` trait implemented by the MySQL and
//! MongoDB sinks, along with the `Record` type produced by the CSV record
//! source. The loader is written against the trait only, so it can drive
//! either destination (or a test double) without knowing the backend.

mod error;
mod record;
mod traits;

pub use error::{BoxError, SinkError};
pub use record::Record;
pub use traits::BulkSink;

/// Number of records accumulated before a batch is submitted to a sink.
pub const BATCH_SIZE: usize = 1000;
