use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::assignment::Model as AssignmentModel;
use db::models::quiz::Model as QuizModel;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;

/// DELETE /api/quizzes/{assignment_id}
///
/// Removes the quiz attached to an assignment the acting user owns.
pub async fn delete_quiz(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    let db = app_state.db();

    match AssignmentModel::find_by_id(db, assignment_id).await {
        Ok(Some(assignment)) if assignment.user_id == claims.sub => {}
        Ok(_) => {
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
    }

    match QuizModel::delete_by_assignment(db, assignment_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Quiz deleted successfully")),
        ),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Quiz not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        ),
    }
}
