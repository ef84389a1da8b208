pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    routing::{get as axum_get, post as axum_post, put as axum_put},
};
use common::{config::Config, state::AppState};

use get::me;
use post::{signin, signup};
use put::make_admin;

pub fn auth_routes() -> Router<AppState> {
    let mut router = Router::new()
        .route("/signup", axum_post(signup))
        .route("/signin", axum_post(signin))
        .route("/me", axum_get(me));

    // Promotion without an existing admin is a development convenience; it
    // never ships to production.
    let env = Config::get().env.to_lowercase();
    if env != "production" {
        router = router.route("/make-admin/{user_id}", axum_put(make_admin));
        tracing::info!("[dev/test] Mounted /auth/make-admin (env = {env})");
    }

    router
}
