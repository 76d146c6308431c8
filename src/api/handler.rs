//! String service operations
//!
//! Ties the analyzer, interpreter and filter evaluator to a record store.
//! Transport-agnostic: the HTTP routes are thin wrappers around these calls.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info};

use crate::analyzer::analyze;
use crate::filter::{evaluate, Evaluation, FilterSet};
use crate::interpreter::interpret;
use crate::observability::Event;
use crate::store::{AnalyzedRecord, RecordStore};

use super::errors::{ApiError, ApiResult};
use super::request::{CreateStringRequest, NaturalLanguageParams};
use super::response::{ListResponse, NaturalLanguageResponse, RecordView};

/// Service over a shared record store
#[derive(Clone)]
pub struct StringService {
    store: Arc<dyn RecordStore>,
}

impl StringService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Analyzes and persists a new string.
    ///
    /// Fails with `DuplicateRecord` if the trimmed value was already stored.
    pub fn create(&self, request: CreateStringRequest) -> ApiResult<RecordView> {
        let analysis = analyze(&request.value);
        let record = AnalyzedRecord::new(analysis, Utc::now());
        let content_hash = record.content_hash().to_string();

        match self.store.insert_if_absent(record) {
            Ok(stored) => {
                info!(
                    event = Event::RecordCreated.as_str(),
                    id = %content_hash,
                    length = stored.properties().length,
                    "string analyzed"
                );
                Ok(RecordView::from(stored))
            }
            Err(e) => {
                let err = ApiError::from(e);
                if matches!(err, ApiError::DuplicateRecord) {
                    debug!(
                        event = Event::DuplicateRejected.as_str(),
                        id = %content_hash,
                        "duplicate submission"
                    );
                }
                Err(log_failure("create", err))
            }
        }
    }

    /// Exact-match lookup by value
    pub fn get(&self, value: &str) -> ApiResult<RecordView> {
        self.store
            .find_by_value(value)
            .map_err(|e| log_failure("get", e.into()))?
            .map(RecordView::from)
            .ok_or(ApiError::NotFound)
    }

    /// Lists stored strings matching the given query parameters
    pub fn list<I, K, V>(&self, query_pairs: I) -> ApiResult<ListResponse>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let filters = FilterSet::from_query_pairs(query_pairs).map_err(|e| {
            debug!(event = Event::RequestRejected.as_str(), error = %e, "bad list parameters");
            ApiError::from(e)
        })?;

        let evaluation = self.evaluate(&filters, "list")?;

        debug!(
            event = Event::ListServed.as_str(),
            count = evaluation.count,
            filters = filters.len(),
            "list served"
        );

        Ok(ListResponse {
            count: evaluation.count,
            data: evaluation.data.into_iter().map(RecordView::from).collect(),
            filters_applied: evaluation.filters_applied,
        })
    }

    /// Interprets a natural-language phrase and lists the matching strings
    pub fn filter_by_natural_language(
        &self,
        params: &NaturalLanguageParams,
    ) -> ApiResult<NaturalLanguageResponse> {
        let phrase = params.phrase()?;

        let interpreted = interpret(phrase).map_err(|e| {
            debug!(
                event = Event::QueryUnparseable.as_str(),
                query = %phrase,
                error = %e,
                "phrase not understood"
            );
            ApiError::from(e)
        })?;

        info!(
            event = Event::QueryInterpreted.as_str(),
            query = %phrase,
            filters = interpreted.parsed_filters.len(),
            "phrase interpreted"
        );

        let evaluation = self.evaluate(&interpreted.parsed_filters, "filter_by_natural_language")?;

        Ok(NaturalLanguageResponse {
            count: evaluation.count,
            data: evaluation.data.into_iter().map(RecordView::from).collect(),
            interpreted_query: interpreted,
        })
    }

    /// Deletes the string with exactly this value
    pub fn delete(&self, value: &str) -> ApiResult<()> {
        self.store
            .delete_by_value(value)
            .map_err(|e| log_failure("delete", e.into()))?;

        info!(event = Event::RecordDeleted.as_str(), value = %value, "string deleted");
        Ok(())
    }

    /// Number of stored strings
    pub fn record_count(&self) -> ApiResult<usize> {
        self.store
            .len()
            .map_err(|e| log_failure("record_count", e.into()))
    }

    fn evaluate(&self, filters: &FilterSet, operation: &str) -> ApiResult<Evaluation> {
        let records = self
            .store
            .list(None)
            .map_err(|e| log_failure(operation, e.into()))?;
        Ok(evaluate(records, filters))
    }
}

/// Logs store failures at error level and passes the error through
fn log_failure(operation: &str, err: ApiError) -> ApiError {
    if err.is_internal() {
        error!(
            event = Event::StoreFailed.as_str(),
            operation,
            error = %err,
            "store operation failed"
        );
    }
    err
}
