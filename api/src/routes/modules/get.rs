use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::module::Model as ModuleModel;

use crate::response::ApiResponse;

/// GET /api/modules/outline/{outline_id}
///
/// Lists the modules of an outline in display order. Public.
pub async fn list_modules_for_outline(
    State(app_state): State<AppState>,
    Path(outline_id): Path<i64>,
) -> impl IntoResponse {
    match ModuleModel::list_for_outline(app_state.db(), outline_id).await {
        Ok(modules) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                modules,
                "Modules fetched successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<ModuleModel>>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}

/// GET /api/modules/{module_id}
///
/// Fetches a single module. Public.
pub async fn get_module(
    State(app_state): State<AppState>,
    Path(module_id): Path<i64>,
) -> impl IntoResponse {
    match ModuleModel::find_by_id(app_state.db(), module_id).await {
        Ok(Some(module)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(module),
                "Module fetched successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Option<ModuleModel>>::error("Module not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Option<ModuleModel>>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
