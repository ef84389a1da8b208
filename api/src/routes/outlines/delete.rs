use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::course_outline::Model as CourseOutlineModel;

use crate::auth::claims::AuthUser;
use crate::auth::guards::require_admin;
use crate::response::ApiResponse;

/// DELETE /api/outlines/{outline_id}
///
/// Removes an outline and, through the cascading foreign keys, its
/// modules and videos. Admin only.
pub async fn delete_outline(
    State(app_state): State<AppState>,
    Path(outline_id): Path<i64>,
    AuthUser(claims): AuthUser,
) -> impl IntoResponse {
    let db = app_state.db();

    match CourseOutlineModel::find_by_id(db, outline_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Course outline not found")),
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

    match CourseOutlineModel::delete(db, outline_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                (),
                "Course outline deleted successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        ),
    }
}
