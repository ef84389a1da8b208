use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use common::state::AppState;
use db::models::user::{Grade, Model as UserModel};
use serde::Serialize;
use tokio::{fs::File as FsFile, io::AsyncReadExt};

use crate::response::ApiResponse;

/// GET /api/users/{user_id}
///
/// Returns a user's public profile. Requires authentication but not
/// ownership; profiles are visible to any signed-in user.
pub async fn get_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
) -> impl IntoResponse {
    match UserModel::find_by_id(app_state.db(), user_id).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(user),
                "User fetched successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Option<UserModel>>::error("User not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Option<UserModel>>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: i64,
    pub academic_level: i64,
    pub level_progress: i64,
    pub grade: Grade,
}

/// GET /api/users/{user_id}/points
///
/// Returns the gamification view of a user: raw points plus the derived
/// level, progress, and grade.
pub async fn get_points(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
) -> impl IntoResponse {
    match UserModel::find_by_id(app_state.db(), user_id).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(PointsResponse {
                    points: user.points,
                    academic_level: user.academic_level,
                    level_progress: user.level_progress,
                    grade: user.grade,
                }),
                "Points fetched successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Option<PointsResponse>>::error("User not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Option<PointsResponse>>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}

/// GET /api/users/{user_id}/avatar
///
/// Serves the uploaded avatar file, if one exists. Public: browsers load
/// this from `<img>` tags without a bearer token. Users without an upload
/// get 404; their `avatar` URL field still points at the generated
/// placeholder.
pub async fn get_avatar(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
) -> impl IntoResponse {
    let user = match UserModel::find_by_id(app_state.db(), user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("User not found")),
            )
                .into_response();
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    };

    let Some(path) = user.avatar_path else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("No uploaded avatar for this user")),
        )
            .into_response();
    };

    let mut file = match FsFile::open(&path).await {
        Ok(file) => file,
        Err(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Avatar file is missing")),
            )
                .into_response();
        }
    };

    let mut bytes = Vec::new();
    if let Err(e) = file.read_to_end(&mut bytes).await {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to read avatar: {e}"
            ))),
        )
            .into_response();
    }

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(mime.as_ref())
            .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream")),
    );

    (StatusCode::OK, headers, bytes).into_response()
}
