pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{Router, middleware::from_fn, routing::get as axum_get};
use common::state::AppState;

use crate::auth::guards::allow_authenticated;
use delete::delete_assignment;
use get::{get_assignment, list_assignments};
use post::create_assignment;
use put::update_assignment;

pub fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/", axum_get(list_assignments).post(create_assignment))
        .route(
            "/{assignment_id}",
            axum_get(get_assignment)
                .put(update_assignment)
                .delete(delete_assignment),
        )
        .route_layer(from_fn(allow_authenticated))
}
