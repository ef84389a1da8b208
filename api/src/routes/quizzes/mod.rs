pub mod delete;
pub mod get;
pub mod post;

use axum::{Router, middleware::from_fn, routing::get as axum_get, routing::post as axum_post};
use common::state::AppState;

use crate::auth::guards::allow_authenticated;
use delete::delete_quiz;
use get::get_quiz;
use post::save_quiz;

pub fn quiz_routes() -> Router<AppState> {
    Router::new()
        .route("/", axum_post(save_quiz))
        .route("/{assignment_id}", axum_get(get_quiz).delete(delete_quiz))
        .route_layer(from_fn(allow_authenticated))
}
