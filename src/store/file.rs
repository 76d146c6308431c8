//! Durable record store backed by an append-only log
//!
//! Layout: `<data_dir>/strings.log`, one entry per line:
//!
//! ```text
//! <crc32, 8 lowercase hex digits> <entry JSON>\n
//! ```
//!
//! Entries are `{"op":"insert","record":{..}}` or
//! `{"op":"delete","value":".."}`. The checksum covers the JSON bytes.
//!
//! - Entries are never rewritten; a delete appends a tombstone
//! - Every append is synced to disk before the index changes
//! - A failed append is truncated away, so the log never holds an entry
//!   the index does not
//! - If the log length differs from the last committed length, writes are
//!   refused until reopen
//! - On open the whole log is replayed; any bad line fails the open

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use super::checksum::{frame_line, unframe_line};
use super::errors::{StoreError, StoreResult};
use super::index::RecordIndex;
use super::record::AnalyzedRecord;
use super::traits::RecordStore;
use crate::filter::FilterSet;
use crate::observability::Event;

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "strings.log";

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
enum LogEntry {
    Insert { record: AnalyzedRecord },
    Delete { value: String },
}

#[derive(Debug)]
struct Inner {
    index: RecordIndex,
    file: File,
    /// Bytes of the log covered by committed entries
    log_len: u64,
}

/// File-backed store
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: RwLock<Inner>,
}

impl FileStore {
    /// Opens or creates the log in `data_dir` and replays it.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` if the directory or file cannot be opened,
    /// `StoreError::Corruption` if any entry fails validation.
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        fs::create_dir_all(data_dir).map_err(|e| {
            StoreError::io(
                format!("Failed to create data directory: {}", data_dir.display()),
                e,
            )
        })?;

        let path = data_dir.join(LOG_FILE_NAME);
        let index = Self::replay(&path)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                StoreError::io(format!("Failed to open store log: {}", path.display()), e)
            })?;
        let log_len = file
            .metadata()
            .map_err(|e| StoreError::io("Failed to stat store log", e))?
            .len();

        info!(
            event = Event::StoreOpened.as_str(),
            path = %path.display(),
            records = index.len(),
            "record store opened"
        );

        Ok(Self {
            path,
            inner: RwLock::new(Inner {
                index,
                file,
                log_len,
            }),
        })
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn replay(path: &Path) -> StoreResult<RecordIndex> {
        let mut index = RecordIndex::new();

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(index),
            Err(e) => {
                return Err(StoreError::io(
                    format!("Failed to read store log: {}", path.display()),
                    e,
                ))
            }
        };

        let mut entries = 0usize;
        for (i, line) in BufReader::new(file).split(b'\n').enumerate() {
            let line_no = i + 1;
            let bytes = line.map_err(|e| StoreError::io("Failed to read store log line", e))?;
            let line = std::str::from_utf8(&bytes)
                .map_err(|_| StoreError::corruption(line_no, "invalid UTF-8"))?;
            let entry = decode_line(line, line_no)?;
            apply(&mut index, entry, line_no)?;
            entries += 1;
        }

        debug!(
            event = Event::StoreReplayed.as_str(),
            entries,
            records = index.len(),
            "store log replayed"
        );

        Ok(index)
    }
}

impl Inner {
    /// Appends and syncs one entry, or leaves the log at its committed length.
    fn append(&mut self, entry: &LogEntry) -> StoreResult<()> {
        let line = encode_line(entry)?;

        let actual = self
            .file
            .metadata()
            .map_err(|e| StoreError::io("Failed to stat store log", e))?
            .len();
        if actual != self.log_len {
            return Err(StoreError::LogDiverged {
                expected: self.log_len,
                actual,
            });
        }

        let written = self
            .file
            .write_all(line.as_bytes())
            .map_err(|e| StoreError::io("Failed to append store log entry", e))
            .and_then(|_| {
                self.file
                    .sync_data()
                    .map_err(|e| StoreError::io("Failed to sync store log", e))
            });

        match written {
            Ok(()) => {
                self.log_len += line.len() as u64;
                Ok(())
            }
            Err(err) => {
                self.rollback();
                Err(err)
            }
        }
    }

    /// Truncates anything past the committed length.
    ///
    /// If this fails too, the length check in `append` refuses later writes.
    fn rollback(&mut self) {
        let truncated = self
            .file
            .set_len(self.log_len)
            .and_then(|_| self.file.sync_data());

        if let Err(e) = truncated {
            error!(
                event = Event::StoreFailed.as_str(),
                error = %e,
                committed_len = self.log_len,
                "failed to roll back partial log entry"
            );
        }
    }
}

fn encode_line(entry: &LogEntry) -> StoreResult<String> {
    Ok(frame_line(&serde_json::to_string(entry)?))
}

fn decode_line(line: &str, line_no: usize) -> StoreResult<LogEntry> {
    let json = unframe_line(line).map_err(|reason| StoreError::corruption(line_no, reason))?;

    serde_json::from_str(json)
        .map_err(|e| StoreError::corruption(line_no, format!("malformed entry: {}", e)))
}

fn apply(index: &mut RecordIndex, entry: LogEntry, line_no: usize) -> StoreResult<()> {
    match entry {
        LogEntry::Insert { record } => {
            if !record.is_consistent() {
                return Err(StoreError::corruption(
                    line_no,
                    "stored properties disagree with value",
                ));
            }
            index
                .insert(record)
                .map_err(|_| StoreError::corruption(line_no, "duplicate insert"))
        }
        LogEntry::Delete { value } => index
            .remove_by_value(&value)
            .map(|_| ())
            .ok_or_else(|| StoreError::corruption(line_no, "delete of unknown value")),
    }
}

impl RecordStore for FileStore {
    fn insert_if_absent(&self, record: AnalyzedRecord) -> StoreResult<AnalyzedRecord> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        inner.index.check_absent(&record)?;

        inner.append(&LogEntry::Insert {
            record: record.clone(),
        })?;
        inner.index.insert(record.clone())?;
        Ok(record)
    }

    fn find_by_value(&self, value: &str) -> StoreResult<Option<AnalyzedRecord>> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.index.find_by_value(value).cloned())
    }

    fn list(&self, filters: Option<&FilterSet>) -> StoreResult<Vec<AnalyzedRecord>> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.index.list(filters))
    }

    fn delete_by_value(&self, value: &str) -> StoreResult<()> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        if !inner.index.contains_value(value) {
            return Err(StoreError::NotFound {
                value: value.to_string(),
            });
        }

        inner.append(&LogEntry::Delete {
            value: value.to_string(),
        })?;
        inner.index.remove_by_value(value);
        Ok(())
    }

    fn len(&self) -> StoreResult<usize> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.index.len())
    }
}
