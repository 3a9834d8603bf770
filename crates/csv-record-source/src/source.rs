//! Header-aware CSV reader producing `Record`s.

use crate::SourceError;
use bulk_sink::Record;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Forward-only reader over a delimited file with a header row.
///
/// The header is read once when the file is opened. Each call to
/// [`RecordSource::next_record`] parses exactly one further row; the
/// sequence cannot be restarted.
pub struct RecordSource {
    path: PathBuf,
    fields: Arc<[String]>,
    reader: Option<csv::Reader<File>>,
    row: csv::StringRecord,
}

impl RecordSource {
    /// Open `path` and read its header row.
    pub fn open(path: impl AsRef<Path>, delimiter: u8) -> Result<Self, SourceError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SourceError::NotFound(path.to_path_buf()));
        }

        // Row shape is not validated; `flexible` lets short and long rows
        // through so they can be aligned against the header.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(delimiter)
            .from_path(path)?;

        let fields: Arc<[String]> = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>()
            .into();

        debug!("Opened {} with columns {:?}", path.display(), fields);

        Ok(Self {
            path: path.to_path_buf(),
            fields,
            reader: Some(reader),
            row: csv::StringRecord::new(),
        })
    }

    /// Field names from the header row, in file order.
    pub fn field_names(&self) -> &[String] {
        &self.fields
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the next record, or `None` once the file is exhausted or closed.
    pub fn next_record(&mut self) -> Result<Option<Record>, SourceError> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        if !reader.read_record(&mut self.row)? {
            return Ok(None);
        }

        if self.row.len() != self.fields.len() {
            let line = self.row.position().map(|p| p.line()).unwrap_or_default();
            warn!(
                "Row at line {} of {} has {} fields, header has {}; aligning to header",
                line,
                self.path.display(),
                self.row.len(),
                self.fields.len()
            );
        }

        let values = self.row.iter().map(|v| v.to_string()).collect();
        Ok(Some(Record::new(Arc::clone(&self.fields), values)))
    }

    /// Release the file handle. Later reads report end of sequence.
    pub fn close(&mut self) {
        if self.reader.take().is_some() {
            debug!("Closed {}", self.path.display());
        }
    }

    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }
}

impl Iterator for RecordSource {
    type Item = Result<Record, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
