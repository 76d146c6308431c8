//! The analyzed string record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analyzer::{analyze, AnalysisResult, StringProperties};

/// A persisted analysis of one trimmed string.
///
/// Records can only be built from an [`AnalysisResult`], so the derived
/// properties always agree with `value`. Records read back from disk are
/// re-checked with [`AnalyzedRecord::is_consistent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedRecord {
    value: String,
    properties: StringProperties,
    created_at: DateTime<Utc>,
}

impl AnalyzedRecord {
    pub fn new(analysis: AnalysisResult, created_at: DateTime<Utc>) -> Self {
        let (value, properties) = analysis.into_parts();
        Self {
            value,
            properties,
            created_at,
        }
    }

    /// The trimmed value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Hex SHA-256 of the value; the record's external id
    pub fn content_hash(&self) -> &str {
        &self.properties.content_hash
    }

    pub fn properties(&self) -> &StringProperties {
        &self.properties
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Recomputes the analysis and compares it with the stored properties
    pub fn is_consistent(&self) -> bool {
        let fresh = analyze(&self.value);
        fresh.value() == self.value && fresh.properties() == &self.properties
    }
}
