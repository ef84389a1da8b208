use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::state::AppState;
use db::models::course_outline::Model as CourseOutlineModel;
use db::models::subject::Model as SubjectModel;
use serde::Deserialize;

use crate::auth::claims::AuthUser;
use crate::auth::guards::require_admin;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct CreateOutlineRequest {
    pub subject_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub display_order: Option<i64>,
}

/// POST /api/outlines
///
/// Adds an outline under a subject. Admin only; the parent subject must
/// exist.
pub async fn create_outline(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(req): Json<CreateOutlineRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err((status, Json(body))) = require_admin(db, &claims).await {
        return (
            status,
            Json(ApiResponse::<Option<CourseOutlineModel>>::error(body.message)),
        );
    }

    let (Some(subject_id), Some(title)) = (
        req.subject_id,
        req.title.filter(|t| !t.trim().is_empty()),
    ) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<CourseOutlineModel>>::error(
                "Subject ID and title are required",
            )),
        );
    };

    match SubjectModel::find_by_id(db, subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Option<CourseOutlineModel>>::error(
                    "Subject not found",
                )),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Option<CourseOutlineModel>>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    }

    match CourseOutlineModel::create(
        db,
        subject_id,
        &title,
        req.description.as_deref().unwrap_or(""),
        req.display_order.unwrap_or(0),
    )
    .await
    {
        Ok(outline) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(outline),
                "Course outline created successfully",
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
