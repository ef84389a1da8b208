use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::video::Model as VideoModel;

use crate::auth::claims::AuthUser;
use crate::auth::guards::require_admin;
use crate::response::ApiResponse;

/// DELETE /api/videos/{video_id}
///
/// Removes a video. Admin only.
pub async fn delete_video(
    State(app_state): State<AppState>,
    Path(video_id): Path<i64>,
    AuthUser(claims): AuthUser,
) -> impl IntoResponse {
    let db = app_state.db();

    match VideoModel::find_by_id(db, video_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Video not found")),
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

    match VideoModel::delete(db, video_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Video deleted successfully")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        ),
    }
}
