//! Shared fixtures for loader tests.

#![allow(dead_code)]

use async_trait::async_trait;
use csv_bulk_loader::{BulkSink, ProgressReporter, Record, SinkError};
use mysql_sink::TableSchema;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A call observed by `RecordingSink`.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Prepare {
        destination: String,
        field_names: Vec<String>,
    },
    /// SQL the relational sink would have run.
    Statement(String),
    Insert(Vec<Record>),
    Close,
}

/// In-memory sink that records every call.
///
/// With `relational` set it also records the DDL and INSERT statements a
/// MySQL sink would issue for the same calls.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
    pub relational: bool,
    /// Fail the insert with this 1-based index.
    pub fail_on_insert: Option<usize>,
    table: Option<TableSchema>,
    inserts: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn relational() -> Self {
        Self {
            relational: true,
            ..Self::default()
        }
    }

    pub fn failing_on_insert(n: usize) -> Self {
        Self {
            fail_on_insert: Some(n),
            ..Self::default()
        }
    }

    pub fn batches(&self) -> Vec<&Vec<Record>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Insert(batch) => Some(batch),
                _ => None,
            })
            .collect()
    }

    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batches().iter().map(|b| b.len()).collect()
    }

    pub fn count(&self, pred: impl Fn(&SinkCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn statements(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Statement(sql) => Some(sql.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl BulkSink for RecordingSink {
    async fn prepare(&mut self, destination: &str, field_names: &[String]) -> Result<(), SinkError> {
        self.calls.push(SinkCall::Prepare {
            destination: destination.to_string(),
            field_names: field_names.to_vec(),
        });
        if self.relational {
            let table = TableSchema::from_field_names(destination, field_names);
            self.calls.push(SinkCall::Statement(table.drop_table()));
            self.calls.push(SinkCall::Statement(table.create_table()));
            self.table = Some(table);
        }
        Ok(())
    }

    async fn insert_batch(&mut self, batch: &[Record]) -> Result<(), SinkError> {
        self.inserts += 1;
        if self.fail_on_insert == Some(self.inserts) {
            return Err(SinkError::write(format!(
                "simulated failure on batch {}",
                self.inserts
            )));
        }
        if let Some(table) = &self.table {
            self.calls.push(SinkCall::Statement(table.batch_insert(batch)));
        }
        self.calls.push(SinkCall::Insert(batch.to_vec()));
        Ok(())
    }

    async fn close(&mut self) -> Result<(), SinkError> {
        self.calls.push(SinkCall::Close);
        Ok(())
    }
}

/// Reporter that keeps the lines `StdoutReporter` would print.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub progress: Vec<u64>,
    pub finished: Vec<(u64, Duration)>,
}

impl ProgressReporter for RecordingReporter {
    fn batch_loaded(&mut self, loaded: u64) {
        self.progress.push(loaded);
    }

    fn finished(&mut self, loaded: u64, elapsed: Duration) {
        self.finished.push((loaded, elapsed));
    }
}

/// Write `people.csv` with header `name,age` and `rows` data rows.
pub fn write_people_csv(dir: &Path, rows: usize) -> PathBuf {
    let path = dir.join("people.csv");
    let mut contents = String::from("name,age\n");
    for i in 0..rows {
        contents.push_str(&format!("person_{i},{}\n", i % 90));
    }
    std::fs::write(&path, contents).unwrap();
    path
}
