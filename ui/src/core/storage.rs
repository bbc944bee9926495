//! Append-only CSV logging for per-trial behavioral rows.
//!
//! Each task defines a record type implementing [`CsvRecord`]; [`CsvLog`] owns the
//! destination path and writes the header exactly once, when the file is first
//! created. Later sessions append below the existing rows.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("unable to determine a data directory for logs")]
    NoDataDir,
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A row with a stable column order.
pub trait CsvRecord {
    fn header() -> &'static [&'static str];
    fn fields(&self) -> Vec<String>;
}

/// Destination for finalized trial records.
pub trait TrialSink<R> {
    fn append(&mut self, record: &R) -> Result<(), StorageError>;
}

#[derive(Debug, Clone)]
pub struct CsvLog {
    path: PathBuf,
}

impl CsvLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Log file `filename` inside the platform log directory.
    pub fn in_log_dir(filename: &str) -> Result<Self, StorageError> {
        Ok(Self::new(super::platform::log_dir()?.join(filename)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append_line<R: CsvRecord>(&self, record: &R) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let write_header = !self.path.exists();
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;

        let mut payload = String::new();
        if write_header {
            payload.push_str(&join_row(R::header().iter().map(|h| h.to_string())));
            payload.push('\n');
        }
        payload.push_str(&join_row(record.fields()));
        payload.push('\n');

        file.write_all(payload.as_bytes()).map_err(write_err)
    }
}

impl<R: CsvRecord> TrialSink<R> for CsvLog {
    fn append(&mut self, record: &R) -> Result<(), StorageError> {
        self.append_line(record)?;
        tracing::trace!(path = %self.path.display(), "appended log row");
        Ok(())
    }
}

/// In-memory sink for headless drivers and tests.
#[derive(Debug, Clone)]
pub struct MemorySink<R> {
    pub records: Vec<R>,
}

impl<R> Default for MemorySink<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Clone> TrialSink<R> for MemorySink<R> {
    fn append(&mut self, record: &R) -> Result<(), StorageError> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// Banner for the result of flushing one frame of rows: a failure sets it,
/// a later success clears it.
pub fn flush_banner(result: &Result<usize, StorageError>, noun: &str) -> Option<String> {
    result
        .as_ref()
        .err()
        .map(|err| format!("Failed to log {noun}: {err}"))
}

fn join_row(fields: impl IntoIterator<Item = String>) -> String {
    fields
        .into_iter()
        .map(|field| escape_csv(&field))
        .collect::<Vec<_>>()
        .join(",")
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}
