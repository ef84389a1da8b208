use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::state::AppState;
use db::models::module::Model as ModuleModel;
use db::models::video::Model as VideoModel;
use serde::Deserialize;

use crate::auth::claims::AuthUser;
use crate::auth::guards::require_admin;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct CreateVideoRequest {
    pub module_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub duration_seconds: Option<i64>,
    pub thumbnail: Option<String>,
    pub display_order: Option<i64>,
}

/// POST /api/videos
///
/// Adds a video under a module. Admin only; the parent module must
/// exist.
pub async fn create_video(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(req): Json<CreateVideoRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err((status, Json(body))) = require_admin(db, &claims).await {
        return (
            status,
            Json(ApiResponse::<Option<VideoModel>>::error(body.message)),
        );
    }

    let (Some(module_id), Some(title), Some(video_url)) = (
        req.module_id,
        req.title.filter(|t| !t.trim().is_empty()),
        req.video_url.filter(|u| !u.trim().is_empty()),
    ) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<VideoModel>>::error(
                "Module ID, title, and video URL are required",
            )),
        );
    };

    match ModuleModel::find_by_id(db, module_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Option<VideoModel>>::error("Module not found")),
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
    }

    match VideoModel::create(
        db,
        module_id,
        &title,
        req.description.as_deref().unwrap_or(""),
        &video_url,
        req.duration_seconds.unwrap_or(0).max(0),
        req.thumbnail.as_deref().unwrap_or(""),
        req.display_order.unwrap_or(0),
    )
    .await
    {
        Ok(video) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(video),
                "Video created successfully",
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
