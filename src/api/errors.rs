//! # API Errors
//!
//! Client-facing error type. Every variant maps to exactly one HTTP status.
//! Store failures surface as `Internal` and are never reported as client
//! errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::filter::FilterError;
use crate::interpreter::InterpretError;
use crate::store::StoreError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Required body field is absent
    #[error("Missing '{0}' field")]
    MissingField(String),

    /// Body field has the wrong JSON type
    #[error("'{0}' must be a string")]
    InvalidType(String),

    /// Body is not a JSON object
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// A record with the same content hash exists
    #[error("String already exists")]
    DuplicateRecord,

    /// No record with the requested value
    #[error("String not found")]
    NotFound,

    /// A numeric query parameter is not an integer
    #[error("Invalid query parameter: {0}")]
    InvalidQueryParameter(String),

    /// Required query parameter is absent
    #[error("Missing required parameter: {0}")]
    MissingParam(String),

    /// Natural-language query could not be interpreted
    #[error("{0}")]
    UnparseablePhrase(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQueryParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,
            ApiError::UnparseablePhrase(_) => StatusCode::BAD_REQUEST,

            ApiError::InvalidType(_) => StatusCode::UNPROCESSABLE_ENTITY,

            ApiError::NotFound => StatusCode::NOT_FOUND,

            ApiError::DuplicateRecord => StatusCode::CONFLICT,

            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { .. } => ApiError::DuplicateRecord,
            StoreError::NotFound { .. } => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        ApiError::InvalidQueryParameter(err.to_string())
    }
}

impl From<InterpretError> for ApiError {
    fn from(err: InterpretError) -> Self {
        ApiError::UnparseablePhrase(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MissingField("value".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidType("value".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::DuplicateRecord.status_code(), StatusCode::CONFLICT);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::UnparseablePhrase("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_errors_map_by_kind() {
        let dup = ApiError::from(StoreError::Duplicate {
            content_hash: "h".into(),
        });
        assert!(matches!(dup, ApiError::DuplicateRecord));

        let missing = ApiError::from(StoreError::NotFound { value: "v".into() });
        assert!(matches!(missing, ApiError::NotFound));

        let corrupt = ApiError::from(StoreError::Corruption {
            line: 2,
            reason: "checksum mismatch".into(),
        });
        assert!(corrupt.is_internal());
    }

    #[test]
    fn test_interpret_error_message() {
        let err = ApiError::from(InterpretError::Unparseable("length".into()));
        assert_eq!(err.to_string(), "Unable to parse length");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_body() {
        let body = ErrorResponse::from(ApiError::NotFound);
        assert_eq!(body.code, 404);
        assert_eq!(body.error, "String not found");
    }
}
