//! Filter construction errors

use thiserror::Error;

/// Result type for filter construction
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors raised while building a filter set from external input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A numeric filter value is not an integer
    #[error("Invalid value for '{name}': expected an integer, got '{value}'")]
    InvalidFilterValue { name: String, value: String },
}

impl FilterError {
    pub(crate) fn invalid_integer(name: &str, value: &str) -> Self {
        FilterError::InvalidFilterValue {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
