//! Streaming CSV record source.
//!
//! Opens a delimited file with a header row and yields one `Record` per data
//! row, lazily and in file order.

mod error;
mod source;

pub use error::SourceError;
pub use source::{RecordSource, DEFAULT_DELIMITER};
