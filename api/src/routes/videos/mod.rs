pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{Router, routing::get as axum_get, routing::post as axum_post};
use common::state::AppState;

use delete::delete_video;
use get::{get_video, list_videos_for_module};
use post::create_video;
use put::update_video;

pub fn video_routes() -> Router<AppState> {
    Router::new()
        .route("/", axum_post(create_video))
        .route("/module/{module_id}", axum_get(list_videos_for_module))
        .route(
            "/{video_id}",
            axum_get(get_video).put(update_video).delete(delete_video),
        )
}
