// src/sink.rs
//
// Output seam. The engine finishes the whole row set before delivery
// begins, so a sink only ever sees complete tables. Remote transports
// (spreadsheet append APIs and their auth) implement this trait elsewhere
// and surface failures as `CartError::Sink(message)`, uninterpreted here.

use std::io::Write;
use std::path::PathBuf;

use crate::csv::{self, Delim};
use crate::error::Result;
use crate::file;

/// Where finished export rows go.
pub trait AppendSink {
    fn append(&mut self, rows: &[Vec<String>]) -> Result<()>;
}

/// Appends rows to a local CSV/TSV file; the file is created (truncated) on
/// the sink's first append, like a fresh sheet.
pub struct CsvFileSink {
    path: PathBuf,
    delim: Delim,
    started: bool,
}

impl CsvFileSink {
    pub fn new(path: impl Into<PathBuf>, delim: Delim) -> Self {
        Self { path: path.into(), delim, started: false }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl AppendSink for CsvFileSink {
    fn append(&mut self, rows: &[Vec<String>]) -> Result<()> {
        if !self.started {
            file::create_export_file(&self.path)?;
            self.started = true;
        }
        file::append_rows(&self.path, rows, self.delim)?;
        Ok(())
    }
}

/// Writes rows to stdout.
pub struct StdoutSink {
    delim: Delim,
}

impl StdoutSink {
    pub fn new(delim: Delim) -> Self {
        Self { delim }
    }
}

impl AppendSink for StdoutSink {
    fn append(&mut self, rows: &[Vec<String>]) -> Result<()> {
        let out = std::io::stdout();
        let mut lock = out.lock();
        lock.write_all(csv::rows_to_string(rows, self.delim).as_bytes())?;
        Ok(())
    }
}

/// Collects rows in memory; stands in for remote transports in tests and
/// previews.
#[derive(Default)]
pub struct BufferSink {
    pub rows: Vec<Vec<String>>,
}

impl AppendSink for BufferSink {
    fn append(&mut self, rows: &[Vec<String>]) -> Result<()> {
        self.rows.extend(rows.iter().cloned());
        Ok(())
    }
}
