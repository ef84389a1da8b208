use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::course_outline::Model as CourseOutlineModel;

use crate::response::ApiResponse;

/// GET /api/outlines/subject/{subject_id}
///
/// Lists the outlines of a subject in display order. Public.
pub async fn list_outlines_for_subject(
    State(app_state): State<AppState>,
    Path(subject_id): Path<i64>,
) -> impl IntoResponse {
    match CourseOutlineModel::list_for_subject(app_state.db(), subject_id).await {
        Ok(outlines) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                outlines,
                "Course outlines fetched successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<CourseOutlineModel>>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}

/// GET /api/outlines/{outline_id}
///
/// Fetches a single course outline. Public.
pub async fn get_outline(
    State(app_state): State<AppState>,
    Path(outline_id): Path<i64>,
) -> impl IntoResponse {
    match CourseOutlineModel::find_by_id(app_state.db(), outline_id).await {
        Ok(Some(outline)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(outline),
                "Course outline fetched successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Option<CourseOutlineModel>>::error(
                "Course outline not found",
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
