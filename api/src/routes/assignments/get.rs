use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::assignment::Model as AssignmentModel;
use serde::Serialize;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;

#[derive(Debug, Serialize, Default)]
pub struct AssignmentListResponse {
    pub count: usize,
    pub assignments: Vec<AssignmentModel>,
}

/// GET /api/assignments
///
/// Lists the acting user's own assignments, soonest due date first. Other
/// users' assignments are never visible here.
pub async fn list_assignments(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    match AssignmentModel::list_for_user(app_state.db(), claims.sub).await {
        Ok(assignments) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AssignmentListResponse {
                    count: assignments.len(),
                    assignments,
                },
                "Assignments fetched successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<AssignmentListResponse>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}

/// GET /api/assignments/{assignment_id}
///
/// Fetches a single assignment. Existence is checked before ownership, so
/// an unknown id is 404 and someone else's assignment is 403.
pub async fn get_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    match AssignmentModel::find_by_id(app_state.db(), assignment_id).await {
        Ok(Some(assignment)) => {
            if assignment.user_id != claims.sub {
                return (
                    StatusCode::FORBIDDEN,
                    Json(ApiResponse::<Option<AssignmentModel>>::error(
                        "Not authorized to view this assignment",
                    )),
                );
            }
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    Some(assignment),
                    "Assignment fetched successfully",
                )),
            )
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Option<AssignmentModel>>::error(
                "Assignment not found",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Option<AssignmentModel>>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
