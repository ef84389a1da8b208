use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use common::state::AppState;
use db::models::assignment::Model as AssignmentModel;
use db::models::quiz::{Model as QuizModel, Question};
use serde::Deserialize;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct SaveQuizRequest {
    pub assignment_id: Option<i64>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// POST /api/quizzes
///
/// Saves the quiz for an assignment the acting user owns. An assignment
/// has at most one quiz: saving again replaces the question set rather
/// than creating a duplicate.
///
/// An assignment that does not exist and one owned by someone else are
/// both reported as 404, so the endpoint leaks nothing about other users'
/// assignment ids.
pub async fn save_quiz(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<SaveQuizRequest>,
) -> impl IntoResponse {
    let Some(assignment_id) = req.assignment_id else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<QuizModel>>::error(
                "Please provide assignment_id and questions",
            )),
        );
    };
    if req.questions.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<QuizModel>>::error(
                "Please provide assignment_id and questions",
            )),
        );
    }

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

    match QuizModel::upsert(db, assignment_id, claims.sub, req.questions).await {
        Ok(quiz) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(quiz),
                "Quiz saved successfully",
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
