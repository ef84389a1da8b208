pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{Router, routing::get as axum_get};
use common::state::AppState;

use delete::delete_subject;
use get::{get_subject, list_subjects};
use post::create_subject;
use put::update_subject;

/// Reads are public; mutations authenticate via the bearer extractor and
/// check the admin role in-handler.
pub fn subject_routes() -> Router<AppState> {
    Router::new()
        .route("/", axum_get(list_subjects).post(create_subject))
        .route(
            "/{subject_id}",
            axum_get(get_subject)
                .put(update_subject)
                .delete(delete_subject),
        )
}
