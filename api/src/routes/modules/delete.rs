use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::module::Model as ModuleModel;

use crate::auth::claims::AuthUser;
use crate::auth::guards::require_admin;
use crate::response::ApiResponse;

/// DELETE /api/modules/{module_id}
///
/// Removes a module and, through the cascading foreign key, its videos.
/// Admin only.
pub async fn delete_module(
    State(app_state): State<AppState>,
    Path(module_id): Path<i64>,
    AuthUser(claims): AuthUser,
) -> impl IntoResponse {
    let db = app_state.db();

    match ModuleModel::find_by_id(db, module_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Module not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
            );
        }
    }

    if let Err(err) = require_admin(db, &claims).await {
        return err;
    }

    match ModuleModel::delete(db, module_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Module deleted successfully")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        ),
    }
}
