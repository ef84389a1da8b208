use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use common::state::AppState;

use crate::response::ApiResponse;

/// GET /api/health
///
/// Liveness probe; no authentication, no database access.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::success((), "Server is running")),
    )
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}
