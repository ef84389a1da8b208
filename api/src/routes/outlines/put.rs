use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::course_outline::Model as CourseOutlineModel;
use serde::Deserialize;

use crate::auth::claims::AuthUser;
use crate::auth::guards::require_admin;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct UpdateOutlineRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub display_order: Option<i64>,
}

/// PUT /api/outlines/{outline_id}
///
/// Updates an outline's fields. Admin only; an unknown id is 404 before
/// the role check.
pub async fn update_outline(
    State(app_state): State<AppState>,
    Path(outline_id): Path<i64>,
    AuthUser(claims): AuthUser,
    Json(req): Json<UpdateOutlineRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let outline = match CourseOutlineModel::find_by_id(db, outline_id).await {
        Ok(Some(outline)) => outline,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Option<CourseOutlineModel>>::error(
                    "Course outline not found",
                )),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Option<CourseOutlineModel>>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    if let Err((status, Json(body))) = require_admin(db, &claims).await {
        return (
            status,
            Json(ApiResponse::<Option<CourseOutlineModel>>::error(body.message)),
        );
    }

    match outline
        .update_fields(db, req.title, req.description, req.display_order)
        .await
    {
        Ok(outline) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(outline),
                "Course outline updated successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Option<CourseOutlineModel>>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
