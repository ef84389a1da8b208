use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::video::{Model as VideoModel, VideoPatch};
use serde::Deserialize;

use crate::auth::claims::AuthUser;
use crate::auth::guards::require_admin;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct UpdateVideoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub duration_seconds: Option<i64>,
    pub thumbnail: Option<String>,
    pub display_order: Option<i64>,
}

/// PUT /api/videos/{video_id}
///
/// Updates a video's fields. Admin only; an unknown id is 404 before
/// the role check.
pub async fn update_video(
    State(app_state): State<AppState>,
    Path(video_id): Path<i64>,
    AuthUser(claims): AuthUser,
    Json(req): Json<UpdateVideoRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let video = match VideoModel::find_by_id(db, video_id).await {
        Ok(Some(video)) => video,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Option<VideoModel>>::error("Video not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Option<VideoModel>>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    if let Err((status, Json(body))) = require_admin(db, &claims).await {
        return (
            status,
            Json(ApiResponse::<Option<VideoModel>>::error(body.message)),
        );
    }

    let patch = VideoPatch {
        title: req.title,
        description: req.description,
        video_url: req.video_url,
        duration_seconds: req.duration_seconds,
        thumbnail: req.thumbnail,
        display_order: req.display_order,
    };

    match video.apply_patch(db, patch).await {
        Ok(video) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(video),
                "Video updated successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Option<VideoModel>>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
