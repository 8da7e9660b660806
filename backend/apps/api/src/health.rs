//! Liveness endpoint

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
}

/// GET /api/health
///
/// Does not touch storage.
pub async fn health(State(service): State<Arc<str>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: service.to_string(),
    })
}
