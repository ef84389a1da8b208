pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{Router, routing::get as axum_get, routing::post as axum_post};
use common::state::AppState;

use delete::delete_outline;
use get::{get_outline, list_outlines_for_subject};
use post::create_outline;
use put::update_outline;

pub fn outline_routes() -> Router<AppState> {
    Router::new()
        .route("/", axum_post(create_outline))
        .route("/subject/{subject_id}", axum_get(list_outlines_for_subject))
        .route(
            "/{outline_id}",
            axum_get(get_outline).put(update_outline).delete(delete_outline),
        )
}
