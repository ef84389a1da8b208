use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use common::{format_validation_errors, state::AppState};
use db::models::assignment::{Model as AssignmentModel, Priority};
use serde::Deserialize;
use validator::Validate;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssignmentRequest {
    #[validate(length(min = 1, message = "Please provide title, subject, and due date"))]
    pub title: String,

    #[validate(length(min = 1, message = "Please provide title, subject, and due date"))]
    pub subject: String,

    pub due_date: DateTime<Utc>,

    pub priority: Option<Priority>,
    pub points: Option<i64>,
    pub description: Option<String>,
}

/// POST /api/assignments
///
/// Creates an assignment owned by the acting user. Ownership is fixed at
/// creation and never transferable.
///
/// ### Request Body
/// ```json
/// {
///   "title": "Essay draft",
///   "subject": "History",
///   "due_date": "2026-02-01T00:00:00Z",
///   "priority": "High",
///   "points": 20,
///   "description": "First draft of the term essay"
/// }
/// ```
pub async fn create_assignment(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateAssignmentRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<AssignmentModel>>::error(
                format_validation_errors(&validation_errors),
            )),
        );
    }

    match AssignmentModel::create(
        app_state.db(),
        claims.sub,
        &req.title,
        &req.subject,
        req.due_date,
        req.priority.unwrap_or(Priority::Medium),
        req.points.unwrap_or(0).max(0),
        req.description.as_deref().unwrap_or(""),
    )
    .await
    {
        Ok(assignment) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(assignment),
                "Assignment created successfully",
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
