//! MySQL sink for csv-bulk-loader.
//!
//! Each load targets one table. `prepare` drops and recreates it from the
//! CSV header (see [`schema::TableSchema`]), and every batch becomes one
//! multi-row `INSERT` committed in its own transaction.

pub mod schema;
mod sink;

pub use schema::{TableSchema, TEXT_COLUMN_WIDTH};
pub use sink::{MySqlSink, MySqlSinkOpts};
