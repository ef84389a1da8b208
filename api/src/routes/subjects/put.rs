use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::subject::Model as SubjectModel;
use serde::Deserialize;

use crate::auth::claims::AuthUser;
use crate::auth::guards::require_admin;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// PUT /api/subjects/{subject_id}
///
/// Updates a subject's display fields. Admin only; an unknown id is 404
/// before any field is touched.
pub async fn update_subject(
    State(app_state): State<AppState>,
    Path(subject_id): Path<i64>,
    AuthUser(claims): AuthUser,
    Json(req): Json<UpdateSubjectRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let subject = match SubjectModel::find_by_id(db, subject_id).await {
        Ok(Some(subject)) => subject,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Option<SubjectModel>>::error("Subject not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Option<SubjectModel>>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    if let Err((status, Json(body))) = require_admin(db, &claims).await {
        return (
            status,
            Json(ApiResponse::<Option<SubjectModel>>::error(body.message)),
        );
    }

    match subject
        .update_fields(db, req.name, req.description, req.icon, req.color)
        .await
    {
        Ok(subject) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(subject),
                "Subject updated successfully",
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
