//! MongoDB sink for csv-bulk-loader.
//!
//! `prepare` drops the target collection; the first `insert_many` recreates
//! it. Each record is written as one document of string fields.

mod document;
mod sink;

pub use document::record_to_document;
pub use sink::{MongoSink, MongoSinkOpts};
