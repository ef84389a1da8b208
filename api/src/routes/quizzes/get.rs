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

/// GET /api/quizzes/{assignment_id}
///
/// Fetches the quiz for an assignment the acting user owns.
pub async fn get_quiz(
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
                Json(ApiResponse::<Option<QuizModel>>::error(
                    "Assignment not found",
                )),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Option<QuizModel>>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    }

    match QuizModel::find_by_assignment(db, assignment_id).await {
        Ok(Some(quiz)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(quiz),
                "Quiz fetched successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Option<QuizModel>>::error(
                "Quiz not found for this assignment",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Option<QuizModel>>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
