use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::state::AppState;
use db::models::subject::Model as SubjectModel;
use serde::Deserialize;

use crate::auth::claims::AuthUser;
use crate::auth::guards::require_admin;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// POST /api/subjects
///
/// Creates a subject. Admin only; the role is re-checked against the
/// current user row, not the token claim.
pub async fn create_subject(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(req): Json<CreateSubjectRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let admin = match require_admin(db, &claims).await {
        Ok(admin) => admin,
        Err((status, Json(body))) => {
            return (
                status,
                Json(ApiResponse::<Option<SubjectModel>>::error(body.message)),
            );
        }
    };

    let Some(name) = req.name.filter(|n| !n.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<SubjectModel>>::error(
                "Subject name is required",
            )),
        );
    };

    match SubjectModel::create(
        db,
        &name,
        req.description.as_deref().unwrap_or(""),
        req.icon.as_deref().unwrap_or("📚"),
        req.color.as_deref().unwrap_or("#6366f1"),
        admin.id,
    )
    .await
    {
        Ok(subject) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(subject),
                "Subject created successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Option<SubjectModel>>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
