use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::module::Model as ModuleModel;
use serde::Deserialize;

use crate::auth::claims::AuthUser;
use crate::auth::guards::require_admin;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct UpdateModuleRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub display_order: Option<i64>,
}

/// PUT /api/modules/{module_id}
///
/// Updates a module's fields. Admin only; an unknown id is 404 before
/// the role check.
pub async fn update_module(
    State(app_state): State<AppState>,
    Path(module_id): Path<i64>,
    AuthUser(claims): AuthUser,
    Json(req): Json<UpdateModuleRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let module = match ModuleModel::find_by_id(db, module_id).await {
        Ok(Some(module)) => module,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Option<ModuleModel>>::error("Module not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Option<ModuleModel>>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    if let Err((status, Json(body))) = require_admin(db, &claims).await {
        return (
            status,
            Json(ApiResponse::<Option<ModuleModel>>::error(body.message)),
        );
    }

    match module
        .update_fields(db, req.title, req.description, req.display_order)
        .await
    {
        Ok(module) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(module),
                "Module updated successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Option<ModuleModel>>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
