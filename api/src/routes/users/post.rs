use axum::{
    Extension, Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::{config::Config, state::AppState};
use db::models::user::{AchievementList, Model as UserModel};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct AddPointsRequest {
    pub points: Option<i64>,
}

#[derive(Debug, Serialize, Default)]
pub struct PointsAwardResponse {
    pub points: i64,
    pub academic_level: i64,
    pub level_progress: i64,
    pub achievements: AchievementList,
}

/// POST /api/users/{user_id}/add-points
///
/// Awards a positive point delta, recomputing level and progress and
/// unlocking the `Reached Level {n}` achievement when a boundary is
/// crossed.
///
/// ### Responses
///
/// - `200 OK` - new totals and the full achievement list.
/// - `400 Bad Request` - missing, zero, or negative delta.
/// - `404 Not Found` - unknown user.
pub async fn add_points(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<AddPointsRequest>,
) -> impl IntoResponse {
    let delta = match req.points {
        Some(points) if points > 0 => points,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<PointsAwardResponse>::error(
                    "Please provide valid points",
                )),
            );
        }
    };

    let db = app_state.db();
    let user = match UserModel::find_by_id(db, user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<PointsAwardResponse>::error("User not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<PointsAwardResponse>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    match user.award_points(db, delta).await {
        Ok((user, _award)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                PointsAwardResponse {
                    points: user.points,
                    academic_level: user.academic_level,
                    level_progress: user.level_progress,
                    achievements: user.achievements,
                },
                format!("+{delta} points awarded!"),
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<PointsAwardResponse>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}

#[derive(Debug, Deserialize)]
pub struct AddAchievementRequest {
    pub achievement: Option<String>,
}

/// POST /api/users/{user_id}/add-achievement
///
/// Records an achievement label directly, outside the points path. A label
/// the user already holds is a successful no-op, not an error.
pub async fn add_achievement(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<AddAchievementRequest>,
) -> impl IntoResponse {
    let label = match req.achievement.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => label.to_owned(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<AchievementList>::error(
                    "Please provide an achievement",
                )),
            );
        }
    };

    let db = app_state.db();
    let user = match UserModel::find_by_id(db, user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<AchievementList>::error("User not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<AchievementList>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    match user.unlock_achievement(db, &label).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                user.achievements,
                "Achievement unlocked!",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<AchievementList>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}

#[derive(Debug, Serialize, Default)]
pub struct AvatarResponse {
    pub avatar: String,
}

/// POST /api/users/{user_id}/upload-avatar
///
/// Accepts a multipart `avatar` file, stores it under the user storage
/// root, and points the profile's avatar URL at the serving route. Only
/// the profile's owner may upload; a storage failure fails the request but
/// never the process.
pub async fn upload_avatar(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let db = app_state.db();

    let user = match UserModel::find_by_id(db, user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<AvatarResponse>::error("User not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<AvatarResponse>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    if claims.sub != user_id {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<AvatarResponse>::error(
                "Not authorized to update this profile",
            )),
        );
    }

    let mut file_bytes: Option<(Vec<u8>, String)> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("avatar") {
            let file_name = field.file_name().unwrap_or("avatar.png").to_owned();
            match field.bytes().await {
                Ok(bytes) => file_bytes = Some((bytes.to_vec(), file_name)),
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ApiResponse::<AvatarResponse>::error(format!(
                            "Failed to read upload: {e}"
                        ))),
                    );
                }
            }
        }
    }

    let Some((bytes, file_name)) = file_bytes else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<AvatarResponse>::error("No file uploaded")),
        );
    };

    if bytes.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<AvatarResponse>::error("File buffer is empty")),
        );
    }

    let ext = PathBuf::from(&file_name)
        .extension()
        .and_then(|e| e.to_str().map(str::to_owned))
        .unwrap_or_else(|| "png".to_owned());

    let dir = PathBuf::from(&Config::get().user_storage_root).join(format!("user_{user_id}"));
    if let Err(e) = tokio::fs::create_dir_all(&dir).await {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<AvatarResponse>::error(format!(
                "Upload failed: {e}"
            ))),
        );
    }

    let path = dir.join(format!("avatar.{ext}"));
    if let Err(e) = tokio::fs::write(&path, &bytes).await {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<AvatarResponse>::error(format!(
                "Upload failed: {e}"
            ))),
        );
    }

    let avatar_url = format!("/api/users/{user_id}/avatar");
    match user
        .set_avatar_upload(db, path.to_string_lossy().into_owned(), avatar_url)
        .await
    {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AvatarResponse {
                    avatar: user.avatar,
                },
                "Avatar uploaded successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<AvatarResponse>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
