//! Observability HTTP Routes
//!
//! Health check reporting service version and record count.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::string_routes::{blocking, StringsState};
use crate::api::{ApiError, HealthResponse};

/// Health check route at `/health`
pub fn health_routes(state: Arc<StringsState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Health check handler
async fn health_handler(
    State(state): State<Arc<StringsState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    let records = blocking(state, |service| service.record_count()).await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records,
    }))
}
