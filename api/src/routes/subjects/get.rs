use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::subject::Model as SubjectModel;

use crate::response::ApiResponse;

/// GET /api/subjects
///
/// Lists all subjects. Public.
pub async fn list_subjects(State(app_state): State<AppState>) -> impl IntoResponse {
    match SubjectModel::list(app_state.db()).await {
        Ok(subjects) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                subjects,
                "Subjects fetched successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<SubjectModel>>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}

/// GET /api/subjects/{subject_id}
///
/// Fetches a single subject. Public.
pub async fn get_subject(
    State(app_state): State<AppState>,
    Path(subject_id): Path<i64>,
) -> impl IntoResponse {
    match SubjectModel::find_by_id(app_state.db(), subject_id).await {
        Ok(Some(subject)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(subject),
                "Subject fetched successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Option<SubjectModel>>::error("Subject not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Option<SubjectModel>>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
