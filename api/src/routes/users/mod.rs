pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get as axum_get, post as axum_post},
};
use common::state::AppState;

use crate::auth::guards::allow_authenticated;
use get::{get_avatar, get_points, get_user};
use post::{add_achievement, add_points, upload_avatar};
use put::update_user;

pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/{user_id}", axum_get(get_user).put(update_user))
        .route("/{user_id}/points", axum_get(get_points))
        .route("/{user_id}/add-points", axum_post(add_points))
        .route("/{user_id}/add-achievement", axum_post(add_achievement))
        .route("/{user_id}/upload-avatar", axum_post(upload_avatar))
        .route_layer(from_fn(allow_authenticated))
        // Avatar retrieval stays public so image tags can load it without a
        // bearer token.
        .route("/{user_id}/avatar", axum_get(get_avatar))
}
