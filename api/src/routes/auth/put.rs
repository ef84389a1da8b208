use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::user::Model as UserModel;

use crate::response::ApiResponse;

/// PUT /api/auth/make-admin/{user_id}
///
/// Promotes a user to admin. Only mounted outside production; there is no
/// in-band way to create the first admin otherwise.
pub async fn make_admin(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
) -> impl IntoResponse {
    match UserModel::set_admin(app_state.db(), user_id, true).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(Some(user), "User promoted to admin")),
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
