use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::state::AppState;
use db::models::course_outline::Model as CourseOutlineModel;
use db::models::module::Model as ModuleModel;
use serde::Deserialize;

use crate::auth::claims::AuthUser;
use crate::auth::guards::require_admin;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct CreateModuleRequest {
    pub outline_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub display_order: Option<i64>,
}

/// POST /api/modules
///
/// Adds a module under a course outline. Admin only; the parent outline
/// must exist.
pub async fn create_module(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(req): Json<CreateModuleRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err((status, Json(body))) = require_admin(db, &claims).await {
        return (
            status,
            Json(ApiResponse::<Option<ModuleModel>>::error(body.message)),
        );
    }

    let (Some(outline_id), Some(title)) = (
        req.outline_id,
        req.title.filter(|t| !t.trim().is_empty()),
    ) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<ModuleModel>>::error(
                "Outline ID and title are required",
            )),
        );
    };

    match CourseOutlineModel::find_by_id(db, outline_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Option<ModuleModel>>::error(
                    "Course outline not found",
                )),
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
    }

    match ModuleModel::create(
        db,
        outline_id,
        &title,
        req.description.as_deref().unwrap_or(""),
        req.display_order.unwrap_or(0),
    )
    .await
    {
        Ok(module) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(module),
                "Module created successfully",
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
