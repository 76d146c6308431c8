//! Process-local record store

use std::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::index::RecordIndex;
use super::record::AnalyzedRecord;
use super::traits::RecordStore;
use crate::filter::FilterSet;

/// In-memory store; contents are lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryStore {
    index: RwLock<RecordIndex>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            index: RwLock::new(RecordIndex::new()),
        }
    }
}

impl RecordStore for MemoryStore {
    fn insert_if_absent(&self, record: AnalyzedRecord) -> StoreResult<AnalyzedRecord> {
        let mut index = self.index.write().map_err(|_| StoreError::Poisoned)?;
        index.insert(record.clone())?;
        Ok(record)
    }

    fn find_by_value(&self, value: &str) -> StoreResult<Option<AnalyzedRecord>> {
        let index = self.index.read().map_err(|_| StoreError::Poisoned)?;
        Ok(index.find_by_value(value).cloned())
    }

    fn list(&self, filters: Option<&FilterSet>) -> StoreResult<Vec<AnalyzedRecord>> {
        let index = self.index.read().map_err(|_| StoreError::Poisoned)?;
        Ok(index.list(filters))
    }

    fn delete_by_value(&self, value: &str) -> StoreResult<()> {
        let mut index = self.index.write().map_err(|_| StoreError::Poisoned)?;
        index
            .remove_by_value(value)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                value: value.to_string(),
            })
    }

    fn len(&self) -> StoreResult<usize> {
        let index = self.index.read().map_err(|_| StoreError::Poisoned)?;
        Ok(index.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use crate::filter::Filter;
    use chrono::Utc;
    use std::sync::Arc;
    use std::thread;

    fn record(value: &str) -> AnalyzedRecord {
        AnalyzedRecord::new(analyze(value), Utc::now())
    }

    #[test]
    fn test_insert_then_duplicate() {
        let store = MemoryStore::new();
        store.insert_if_absent(record("hello")).unwrap();

        let err = store.insert_if_absent(record("hello")).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store.delete_by_value("nope").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_delete_then_lookup() {
        let store = MemoryStore::new();
        store.insert_if_absent(record("gone")).unwrap();
        store.delete_by_value("gone").unwrap();

        assert!(store.find_by_value("gone").unwrap().is_none());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_list_with_filters() {
        let store = MemoryStore::new();
        for v in ["level", "hello", "noon"] {
            store.insert_if_absent(record(v)).unwrap();
        }

        let filters = FilterSet::new().with(Filter::IsPalindrome(true));
        let values: Vec<_> = store
            .list(Some(&filters))
            .unwrap()
            .into_iter()
            .map(|r| r.value().to_string())
            .collect();
        assert_eq!(values, vec!["level", "noon"]);
        assert_eq!(store.list(None).unwrap().len(), 3);
    }

    #[test]
    fn test_concurrent_inserts_single_winner() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.insert_if_absent(record("race")).is_ok())
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(wins, 1);
        assert_eq!(store.len().unwrap(), 1);
    }
}
