//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub claims: usize,
    pub disasters: usize,
}

/// Health check endpoint, including loaded record counts
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        claims: state.datasets.claims().len(),
        disasters: state.datasets.disasters().len(),
    })
}
