use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::subject::Model as SubjectModel;

use crate::auth::claims::AuthUser;
use crate::auth::guards::require_admin;
use crate::response::ApiResponse;

/// DELETE /api/subjects/{subject_id}
///
/// Removes a subject and, through the cascading foreign keys, every
/// outline, module, and video underneath it. Admin only.
pub async fn delete_subject(
    State(app_state): State<AppState>,
    Path(subject_id): Path<i64>,
    AuthUser(claims): AuthUser,
) -> impl IntoResponse {
    let db = app_state.db();

    match SubjectModel::find_by_id(db, subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Subject not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
            );
        }
    }

    if let Err(err) = require_admin(db, &claims).await {
        return err;
    }

    match SubjectModel::delete(db, subject_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Subject deleted successfully")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        ),
    }
}
