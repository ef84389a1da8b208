use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::assignment::Model as AssignmentModel;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;

/// DELETE /api/assignments/{assignment_id}
///
/// Deletes an owned assignment; its quiz, if any, goes with it through the
/// schema's cascading foreign key.
pub async fn delete_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    let db = app_state.db();

    let assignment = match AssignmentModel::find_by_id(db, assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Assignment not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
            );
        }
    };

    if assignment.user_id != claims.sub {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error(
                "Not authorized to delete this assignment",
            )),
        );
    }

    match AssignmentModel::delete(db, assignment_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Assignment deleted successfully")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        ),
    }
}
