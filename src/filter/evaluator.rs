//! Applies a filter set to a sequence of records

use super::filter_set::FilterSet;
use crate::store::AnalyzedRecord;

/// Outcome of evaluating a filter set
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Matching records, in input order
    pub data: Vec<AnalyzedRecord>,
    /// Number of matching records
    pub count: usize,
    /// The clauses that were applied
    pub filters_applied: FilterSet,
}

/// Keeps the records matching every clause of `filters`.
pub fn evaluate<I>(records: I, filters: &FilterSet) -> Evaluation
where
    I: IntoIterator<Item = AnalyzedRecord>,
{
    let data: Vec<AnalyzedRecord> = records
        .into_iter()
        .filter(|record| filters.matches(record))
        .collect();

    Evaluation {
        count: data.len(),
        data,
        filters_applied: filters.clone(),
    }
}
