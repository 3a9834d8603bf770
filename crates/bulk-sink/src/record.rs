//! The record type passed from the source to the sinks.

use std::sync::Arc;

/// One data row from a delimited file.
///
/// Field names come from the file's header row and are shared by every
/// record of that file. Values are raw text; a missing cell is an empty
/// string, never null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Arc<[String]>,
    values: Vec<String>,
}

impl Record {
    /// Build a record from a shared header and its values.
    ///
    /// `values` is aligned to `fields`: missing trailing values become empty
    /// strings and surplus values are dropped.
    pub fn new(fields: Arc<[String]>, mut values: Vec<String>) -> Self {
        values.resize(fields.len(), String::new());
        Self { fields, values }
    }

    /// Field names in header order.
    pub fn field_names(&self) -> &[String] {
        &self.fields
    }

    /// Values in header order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Look up a value by field name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .position(|f| f == field)
            .map(|i| self.values[i].as_str())
    }

    /// Iterate over `(field, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Arc<[String]> {
        vec!["name".to_string(), "age".to_string()].into()
    }

    #[test]
    fn test_record_lookup() {
        let record = Record::new(header(), vec!["alice".to_string(), "30".to_string()]);
        assert_eq!(record.get("name"), Some("alice"));
        assert_eq!(record.get("age"), Some("30"));
        assert_eq!(record.get("email"), None);
        assert_eq!(
            record.iter().collect::<Vec<_>>(),
            vec![("name", "alice"), ("age", "30")]
        );
    }

    #[test]
    fn test_short_row_is_padded() {
        let record = Record::new(header(), vec!["bob".to_string()]);
        assert_eq!(record.values(), &["bob".to_string(), String::new()]);
        assert_eq!(record.get("age"), Some(""));
    }

    #[test]
    fn test_long_row_is_truncated() {
        let record = Record::new(
            header(),
            vec!["carol".to_string(), "41".to_string(), "extra".to_string()],
        );
        assert_eq!(record.len(), 2);
        assert_eq!(record.values(), &["carol".to_string(), "41".to_string()]);
    }
}
