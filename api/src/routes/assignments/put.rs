use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use common::state::AppState;
use db::models::assignment::{AssignmentPatch, Model as AssignmentModel, Priority, Status};
use db::models::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub points: Option<i64>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct UpdateAssignmentResponse {
    pub assignment: Option<AssignmentModel>,
    pub points_awarded: i64,
}

/// PUT /api/assignments/{assignment_id}
///
/// Updates an owned assignment. A transition into `Completed` from a stored
/// non-Completed status stamps `completed_at` (once, ever) and awards the
/// assignment's point value through the same points path as a direct
/// award, so the level, progress, and level-up achievements stay
/// consistent. Leaving `Completed` and re-entering it later awards nothing
/// further.
///
/// ### Responses
///
/// - `200 OK` - updated assignment plus `points_awarded` (0 when no award
///   fired).
/// - `403 Forbidden` - assignment owned by someone else.
/// - `404 Not Found` - unknown assignment id.
pub async fn update_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<UpdateAssignmentRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let assignment = match AssignmentModel::find_by_id(db, assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<UpdateAssignmentResponse>::error(
                    "Assignment not found",
                )),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UpdateAssignmentResponse>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    if assignment.user_id != claims.sub {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<UpdateAssignmentResponse>::error(
                "Not authorized to update this assignment",
            )),
        );
    }

    let patch = AssignmentPatch {
        title: req.title,
        subject: req.subject,
        due_date: req.due_date,
        priority: req.priority,
        status: req.status,
        points: req.points,
        description: req.description,
    };

    let (assignment, just_completed) = match assignment.apply_patch(db, patch).await {
        Ok(result) => result,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UpdateAssignmentResponse>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    let mut points_awarded = 0;
    if just_completed && assignment.points > 0 {
        match UserModel::find_by_id(db, claims.sub).await {
            Ok(Some(user)) => match user.award_points(db, assignment.points).await {
                Ok(_) => points_awarded = assignment.points,
                Err(e) => {
                    // The assignment update already committed; report the
                    // failed award instead of pretending it happened.
                    warn!(user_id = claims.sub, assignment_id, error = %e, "completion point award failed");
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(ApiResponse::<UpdateAssignmentResponse>::error(format!(
                            "Database error: {e}"
                        ))),
                    );
                }
            },
            Ok(None) => {
                warn!(user_id = claims.sub, assignment_id, "owner row missing during completion award");
            }
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<UpdateAssignmentResponse>::error(format!(
                        "Database error: {e}"
                    ))),
                );
            }
        }
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            UpdateAssignmentResponse {
                assignment: Some(assignment),
                points_awarded,
            },
            "Assignment updated successfully",
        )),
    )
}
