//! In-memory record index shared by both store implementations

use std::collections::{BTreeMap, HashMap};

use super::errors::{StoreError, StoreResult};
use super::record::AnalyzedRecord;
use crate::filter::FilterSet;

/// Creation-ordered records with unique value and hash indexes.
///
/// Not synchronized; callers hold the store lock.
#[derive(Debug, Default)]
pub(crate) struct RecordIndex {
    records: BTreeMap<u64, AnalyzedRecord>,
    by_value: HashMap<String, u64>,
    by_hash: HashMap<String, u64>,
    next_seq: u64,
}

impl RecordIndex {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Fails with `Duplicate` if the value or hash is already present
    pub(crate) fn check_absent(&self, record: &AnalyzedRecord) -> StoreResult<()> {
        if self.by_hash.contains_key(record.content_hash())
            || self.by_value.contains_key(record.value())
        {
            return Err(StoreError::Duplicate {
                content_hash: record.content_hash().to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn insert(&mut self, record: AnalyzedRecord) -> StoreResult<()> {
        self.check_absent(&record)?;

        let seq = self.next_seq;
        self.next_seq += 1;
        self.by_value.insert(record.value().to_string(), seq);
        self.by_hash.insert(record.content_hash().to_string(), seq);
        self.records.insert(seq, record);
        Ok(())
    }

    pub(crate) fn contains_value(&self, value: &str) -> bool {
        self.by_value.contains_key(value)
    }

    pub(crate) fn find_by_value(&self, value: &str) -> Option<&AnalyzedRecord> {
        self.by_value.get(value).and_then(|seq| self.records.get(seq))
    }

    pub(crate) fn list(&self, filters: Option<&FilterSet>) -> Vec<AnalyzedRecord> {
        self.records
            .values()
            .filter(|record| filters.map_or(true, |f| f.matches(record)))
            .cloned()
            .collect()
    }

    pub(crate) fn remove_by_value(&mut self, value: &str) -> Option<AnalyzedRecord> {
        let seq = self.by_value.remove(value)?;
        let record = self.records.remove(&seq)?;
        self.by_hash.remove(record.content_hash());
        Some(record)
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}
