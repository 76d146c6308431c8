//! Record store gateway
//!
//! The service never talks to storage directly; it goes through the
//! [`RecordStore`] trait. Two implementations are provided:
//!
//! - [`MemoryStore`]: process-local, lost on exit
//! - [`FileStore`]: append-only, checksummed log replayed on open
//!
//! # Invariants
//!
//! - `value` and `content_hash` are each unique across the store
//! - Uniqueness check and insert happen under one write lock, so of two
//!   concurrent submissions of the same value exactly one succeeds
//! - Records are never updated in place; delete is by exact value

mod checksum;
mod errors;
mod file;
mod index;
mod memory;
mod record;
mod traits;

pub use checksum::{compute_checksum, frame_line, unframe_line};
pub use errors::{StoreError, StoreResult};
pub use file::{FileStore, LOG_FILE_NAME};
pub use memory::MemoryStore;
pub use record::AnalyzedRecord;
pub use traits::RecordStore;
