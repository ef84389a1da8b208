use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::video::Model as VideoModel;

use crate::response::ApiResponse;

/// GET /api/videos/module/{module_id}
///
/// Lists the videos of a module in display order. Public.
pub async fn list_videos_for_module(
    State(app_state): State<AppState>,
    Path(module_id): Path<i64>,
) -> impl IntoResponse {
    match VideoModel::list_for_module(app_state.db(), module_id).await {
        Ok(videos) => (
            StatusCode::OK,
            Json(ApiResponse::success(videos, "Videos fetched successfully")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<VideoModel>>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}

/// GET /api/videos/{video_id}
///
/// Fetches a single video. Public.
pub async fn get_video(
    State(app_state): State<AppState>,
    Path(video_id): Path<i64>,
) -> impl IntoResponse {
    match VideoModel::find_by_id(app_state.db(), video_id).await {
        Ok(Some(video)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(video),
                "Video fetched successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Option<VideoModel>>::error("Video not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Option<VideoModel>>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
