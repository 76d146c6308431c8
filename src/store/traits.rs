//! Record store trait

use super::errors::StoreResult;
use super::record::AnalyzedRecord;
use crate::filter::FilterSet;

/// Storage for analyzed records
pub trait RecordStore: Send + Sync {
    /// Inserts the record unless its value or content hash already exists.
    ///
    /// Fails with `StoreError::Duplicate` otherwise. The check and the insert
    /// are atomic.
    fn insert_if_absent(&self, record: AnalyzedRecord) -> StoreResult<AnalyzedRecord>;

    /// Exact-match lookup by trimmed value
    fn find_by_value(&self, value: &str) -> StoreResult<Option<AnalyzedRecord>>;

    /// All records in creation order, optionally restricted by `filters`
    fn list(&self, filters: Option<&FilterSet>) -> StoreResult<Vec<AnalyzedRecord>>;

    /// Removes the record with exactly this value.
    ///
    /// Fails with `StoreError::NotFound` if there is none.
    fn delete_by_value(&self, value: &str) -> StoreResult<()>;

    /// Number of live records
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
