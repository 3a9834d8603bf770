//! Record to BSON conversion.

use bson::{Bson, Document};
use bulk_sink::Record;

/// Convert a `Record` to a BSON `Document`.
///
/// Keys are the header field names in order and every value is the raw cell
/// text. No `_id` is added here; the driver assigns one on insert.
pub fn record_to_document(record: &Record) -> Document {
    let mut doc = Document::new();
    for (field, value) in record.iter() {
        doc.insert(field, Bson::String(value.to_string()));
    }
    doc
}
