use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::user::{Grade, Model as UserModel};
use serde::Deserialize;

use crate::auth::claims::AuthUser;
use crate::auth::guards::require_admin;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub grade: Option<Grade>,
    pub avatar: Option<String>,
    pub class_name: Option<String>,
}

/// PUT /api/users/{user_id}
///
/// Updates a user's profile fields. A user may edit their own profile;
/// editing anyone else requires the admin role, re-checked against storage
/// rather than trusted from the token.
///
/// Existence is checked before authorization: an unknown id is 404 even
/// for a caller who would not have been allowed to touch it.
pub async fn update_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<UpdateUserRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let user = match UserModel::find_by_id(db, user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Option<UserModel>>::error("User not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Option<UserModel>>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    if claims.sub != user_id {
        if let Err((status, Json(body))) = require_admin(db, &claims).await {
            if status == StatusCode::FORBIDDEN {
                return (
                    StatusCode::FORBIDDEN,
                    Json(ApiResponse::<Option<UserModel>>::error(
                        "Not authorized to update this profile",
                    )),
                );
            }
            return (
                status,
                Json(ApiResponse::<Option<UserModel>>::error(body.message)),
            );
        }
    }

    match user
        .update_profile(db, req.name, req.grade, req.avatar, req.class_name)
        .await
    {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(user),
                "Profile updated successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Option<UserModel>>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
