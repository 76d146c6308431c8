//! String HTTP Routes
//!
//! Endpoints for submitting, retrieving, filtering and deleting analyzed
//! strings.
//!
//! Service calls may fsync the store log, so they run on the blocking pool.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::Value;

use crate::api::{
    ApiError, ApiResult, CreateStringRequest, ListResponse, NaturalLanguageParams,
    NaturalLanguageResponse, RecordView, StringService,
};

// ==================
// Shared State
// ==================

/// String state shared across handlers
pub struct StringsState {
    pub service: StringService,
}

impl StringsState {
    pub fn new(service: StringService) -> Self {
        Self { service }
    }
}

/// Runs a service call on the blocking thread pool
pub(super) async fn blocking<T, F>(state: Arc<StringsState>, op: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&StringService) -> ApiResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || op(&state.service))
        .await
        .map_err(|e| ApiError::Internal(format!("Store task failed: {}", e)))?
}

// ==================
// String Routes
// ==================

/// Create string routes
pub fn string_routes(state: Arc<StringsState>) -> Router {
    Router::new()
        .route("/strings", post(create_string_handler).get(list_strings_handler))
        .route("/strings/", get(list_strings_handler))
        .route(
            "/strings/filter-by-natural-language",
            get(natural_language_handler),
        )
        .route("/strings/:value", get(get_string_handler))
        .route("/strings/:value/delete", delete(delete_string_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_string_handler(
    State(state): State<Arc<StringsState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<RecordView>), ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    let request = CreateStringRequest::try_from(body)?;

    let view = blocking(state, move |service| service.create(request)).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

async fn get_string_handler(
    State(state): State<Arc<StringsState>>,
    Path(value): Path<String>,
) -> Result<Json<RecordView>, ApiError> {
    let view = blocking(state, move |service| service.get(&value)).await?;
    Ok(Json(view))
}

async fn list_strings_handler(
    State(state): State<Arc<StringsState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ListResponse>, ApiError> {
    let response = blocking(state, move |service| service.list(pairs)).await?;
    Ok(Json(response))
}

async fn natural_language_handler(
    State(state): State<Arc<StringsState>>,
    Query(params): Query<NaturalLanguageParams>,
) -> Result<Json<NaturalLanguageResponse>, ApiError> {
    let response = blocking(state, move |service| {
        service.filter_by_natural_language(&params)
    })
    .await?;
    Ok(Json(response))
}

async fn delete_string_handler(
    State(state): State<Arc<StringsState>>,
    Path(value): Path<String>,
) -> Result<StatusCode, ApiError> {
    blocking(state, move |service| service.delete(&value)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn state() -> Arc<StringsState> {
        Arc::new(StringsState::new(StringService::new(Arc::new(
            MemoryStore::new(),
        ))))
    }

    #[test]
    fn test_router_builds() {
        let _router = string_routes(state());
    }

    #[tokio::test]
    async fn test_blocking_runs_service_call() {
        let state = state();
        blocking(state.clone(), |service| {
            service.create(CreateStringRequest::new("off the runtime"))
        })
        .await
        .unwrap();

        assert_eq!(state.service.record_count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_blocking_surfaces_panics_as_internal() {
        let err = blocking(state(), |_| -> ApiResult<()> { panic!("store exploded") })
            .await
            .unwrap_err();
        assert!(err.is_internal());
    }
}
