//! API response types

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analyzer::StringProperties;
use crate::filter::FilterSet;
use crate::interpreter::InterpretedQuery;
use crate::store::AnalyzedRecord;

/// Public projection of a record
#[derive(Debug, Clone, Serialize)]
pub struct RecordView {
    /// Content hash
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

impl From<AnalyzedRecord> for RecordView {
    fn from(record: AnalyzedRecord) -> Self {
        Self {
            id: record.content_hash().to_string(),
            value: record.value().to_string(),
            properties: record.properties().clone(),
            created_at: record.created_at(),
        }
    }
}

/// `GET /strings/` response
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub data: Vec<RecordView>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

/// `GET /strings/filter-by-natural-language` response
#[derive(Debug, Clone, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<RecordView>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// `GET /health` response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records: usize,
}
