//! Health check endpoint

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use super::customer_routes::CustomerState;
use super::errors::ApiResult;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Records currently held by the store
    pub customers: usize,
}

/// Health check route
pub fn health_routes(store: CustomerState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(store)
}

async fn health_handler(
    State(store): State<CustomerState>,
) -> ApiResult<(StatusCode, Json<HealthResponse>)> {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        customers: store.list()?.len(),
    };

    Ok((StatusCode::OK, Json(response)))
}
