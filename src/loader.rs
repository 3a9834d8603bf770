//! Batching loop that drives a `RecordSource` into a `BulkSink`.

use crate::progress::ProgressReporter;
use crate::LoadError;
use bulk_sink::{BulkSink, BATCH_SIZE};
use csv_record_source::RecordSource;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Lifecycle of a `Loader`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    Uninitialized,
    Prepared,
    Loading,
    Done,
    Closed,
}

/// Outcome of a completed `Loader::write`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Number of records written.
    pub records: u64,
    /// Number of `insert_batch` calls issued.
    pub batches: u64,
    /// Time from the end of the destination reset to the last write.
    pub elapsed: Duration,
}

/// Derive the destination table or collection name from a file path.
///
/// This is the file name up to its first `.`, so `data/people.csv` and
/// `people.2024.csv` both load into `people`.
pub fn destination_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    file_name.split('.').next().unwrap_or_default().to_string()
}

/// Loads one delimited file into one destination.
///
/// `write` resets the destination and streams every record into it in
/// batches of [`BATCH_SIZE`]. `close` must run afterwards on every path;
/// [`Loader::run`] does both.
pub struct Loader<S, P> {
    source: RecordSource,
    sink: S,
    reporter: P,
    destination: String,
    state: LoaderState,
}

impl<S: BulkSink, P: ProgressReporter> Loader<S, P> {
    /// Open `path` and build a loader targeting the destination named after it.
    pub fn new(
        path: impl AsRef<Path>,
        delimiter: u8,
        sink: S,
        reporter: P,
    ) -> Result<Self, LoadError> {
        let source = RecordSource::open(path, delimiter)?;
        Self::from_source(source, sink, reporter)
    }

    /// Build a loader from an already opened source.
    ///
    /// Fails when the file name yields an empty destination name (`.csv`).
    pub fn from_source(source: RecordSource, sink: S, reporter: P) -> Result<Self, LoadError> {
        let destination = destination_name(source.path());
        if destination.is_empty() {
            return Err(LoadError::EmptyDestination(source.path().to_path_buf()));
        }
        debug!(
            "Loader for {} targets '{}'",
            source.path().display(),
            destination
        );
        Ok(Self {
            source,
            sink,
            reporter,
            destination,
            state: LoaderState::Uninitialized,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn state(&self) -> LoaderState {
        self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn reporter(&self) -> &P {
        &self.reporter
    }

    pub fn is_source_closed(&self) -> bool {
        self.source.is_closed()
    }

    /// Reset the destination and write every record to it.
    ///
    /// Errors from the sink are returned as-is; nothing is retried. The
    /// destination is left holding whatever batches succeeded.
    pub async fn write(&mut self) -> Result<LoadSummary, LoadError> {
        if self.state != LoaderState::Uninitialized {
            return Err(LoadError::InvalidState {
                op: "write",
                state: self.state,
            });
        }

        info!(
            "Resetting '{}' with columns {:?}",
            self.destination,
            self.source.field_names()
        );
        self.sink
            .prepare(&self.destination, self.source.field_names())
            .await?;
        self.state = LoaderState::Prepared;

        let started = Instant::now();
        self.state = LoaderState::Loading;

        let mut loaded: u64 = 0;
        let mut batches: u64 = 0;
        let mut batch = Vec::with_capacity(BATCH_SIZE);

        while let Some(record) = self.source.next_record()? {
            batch.push(record);
            loaded += 1;

            if batch.len() == BATCH_SIZE {
                self.sink.insert_batch(&batch).await?;
                batches += 1;
                self.reporter.batch_loaded(loaded);
                batch.clear();
            }
        }

        if !batch.is_empty() {
            debug!("Writing final batch of {} records", batch.len());
            self.sink.insert_batch(&batch).await?;
            batches += 1;
        }

        let elapsed = started.elapsed();
        self.reporter.finished(loaded, elapsed);
        self.state = LoaderState::Done;

        info!(
            "Loaded {loaded} records into '{}' in {batches} batches",
            self.destination
        );

        Ok(LoadSummary {
            records: loaded,
            batches,
            elapsed,
        })
    }

    /// Release the source file and the sink connection.
    ///
    /// Safe to call from any state and more than once; only the first call
    /// does anything.
    pub async fn close(&mut self) -> Result<(), LoadError> {
        if self.state == LoaderState::Closed {
            return Ok(());
        }
        self.state = LoaderState::Closed;
        self.source.close();
        self.sink.close().await?;
        Ok(())
    }

    /// `write` followed by `close`, closing even when `write` fails.
    ///
    /// A `write` error is returned in preference to a `close` error.
    pub async fn run(&mut self) -> Result<LoadSummary, LoadError> {
        let result = self.write().await;
        let closed = self.close().await;
        match (result, closed) {
            (Ok(summary), Ok(())) => Ok(summary),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(close_err)) => {
                warn!("Close failed after load error: {close_err}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_name() {
        assert_eq!(destination_name(Path::new("people.csv")), "people");
        assert_eq!(destination_name(Path::new("/data/in/orders.csv")), "orders");
        assert_eq!(destination_name(Path::new("people.2024.csv")), "people");
        assert_eq!(destination_name(Path::new("noext")), "noext");
        assert_eq!(destination_name(Path::new("/data/.csv")), "");
    }
}
