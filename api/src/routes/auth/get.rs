use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::state::AppState;
use db::models::user::Model as UserModel;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;

/// GET /api/auth/me
///
/// Returns the authenticated user's profile. Requires a valid bearer token
/// in the `Authorization` header.
pub async fn me(State(app_state): State<AppState>, AuthUser(claims): AuthUser) -> impl IntoResponse {
    match UserModel::find_by_id(app_state.db(), claims.sub).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(user),
                "User data retrieved successfully",
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
