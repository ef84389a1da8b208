pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{Router, routing::get as axum_get, routing::post as axum_post};
use common::state::AppState;

use delete::delete_module;
use get::{get_module, list_modules_for_outline};
use post::create_module;
use put::update_module;

pub fn module_routes() -> Router<AppState> {
    Router::new()
        .route("/", axum_post(create_module))
        .route("/outline/{outline_id}", axum_get(list_modules_for_outline))
        .route(
            "/{module_id}",
            axum_get(get_module).put(update_module).delete(delete_module),
        )
}
