//! Progress reporting for the batching loop.

use std::io::{self, Write};
use std::time::Duration;
use tracing::{info, warn};

/// Receives progress events from `Loader::write`.
pub trait ProgressReporter: Send {
    /// Called after each full batch with the cumulative record count.
    fn batch_loaded(&mut self, loaded: u64);

    /// Called once when the source is exhausted and the last batch is written.
    fn finished(&mut self, loaded: u64, elapsed: Duration);
}

/// Prints progress lines, to standard output unless another writer is given.
///
/// Output format:
/// ```text
/// by current have loaded 1000
/// by current have loaded 2000
/// toc:0.8421
/// ```
#[derive(Debug)]
pub struct StdoutReporter<W = io::Stdout> {
    out: W,
}

impl Default for StdoutReporter {
    fn default() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write + Send> StdoutReporter<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!("Failed to write progress line: {e}");
        }
    }
}

impl<W: Write + Send> ProgressReporter for StdoutReporter<W> {
    fn batch_loaded(&mut self, loaded: u64) {
        info!(loaded, "Batch written");
        self.emit(format_args!("by current have loaded {loaded}"));
    }

    fn finished(&mut self, loaded: u64, elapsed: Duration) {
        info!(loaded, elapsed_secs = elapsed.as_secs_f64(), "Load complete");
        self.emit(format_args!("toc:{}", elapsed.as_secs_f64()));
    }
}

/// Discards all progress events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn batch_loaded(&mut self, _loaded: u64) {}

    fn finished(&mut self, _loaded: u64, _elapsed: Duration) {}
}
