//! API request types
//!
//! Bodies and query strings are validated into these types before any
//! analysis or store access happens.

use serde::Deserialize;
use serde_json::Value;

use super::errors::{ApiError, ApiResult};

/// Body of `POST /strings`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStringRequest {
    /// Raw submitted value, untrimmed
    pub value: String,
}

impl CreateStringRequest {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl TryFrom<Value> for CreateStringRequest {
    type Error = ApiError;

    /// - not an object: `InvalidBody`
    /// - `value` absent or null: `MissingField`
    /// - `value` not a string: `InvalidType`
    fn try_from(body: Value) -> ApiResult<Self> {
        let Value::Object(mut fields) = body else {
            return Err(ApiError::InvalidBody("expected a JSON object".to_string()));
        };

        match fields.remove("value") {
            None | Some(Value::Null) => Err(ApiError::MissingField("value".to_string())),
            Some(Value::String(value)) => Ok(Self { value }),
            Some(_) => Err(ApiError::InvalidType("value".to_string())),
        }
    }
}

/// Query string of `GET /strings/filter-by-natural-language`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NaturalLanguageParams {
    #[serde(default)]
    pub query: Option<String>,
}

impl NaturalLanguageParams {
    /// The phrase, or `MissingParam` if absent
    pub fn phrase(&self) -> ApiResult<&str> {
        self.query
            .as_deref()
            .ok_or_else(|| ApiError::MissingParam("query".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_body() {
        let request = CreateStringRequest::try_from(json!({"value": "  hi  "})).unwrap();
        assert_eq!(request.value, "  hi  ");
    }

    #[test]
    fn test_missing_value() {
        let err = CreateStringRequest::try_from(json!({"other": 1})).unwrap_err();
        assert!(matches!(err, ApiError::MissingField(_)));

        let err = CreateStringRequest::try_from(json!({"value": null})).unwrap_err();
        assert!(matches!(err, ApiError::MissingField(_)));
    }

    #[test]
    fn test_non_string_value() {
        for body in [json!({"value": 42}), json!({"value": ["a"]}), json!({"value": true})] {
            let err = CreateStringRequest::try_from(body).unwrap_err();
            assert!(matches!(err, ApiError::InvalidType(_)));
        }
    }

    #[test]
    fn test_non_object_body() {
        let err = CreateStringRequest::try_from(json!(["value"])).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBody(_)));
    }

    #[test]
    fn test_missing_query() {
        let params = NaturalLanguageParams::default();
        assert!(matches!(params.phrase(), Err(ApiError::MissingParam(_))));
    }
}
