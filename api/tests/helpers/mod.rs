#![allow(dead_code)]

use api::auth::generate_jwt;
use api::routes::routes;
use axum::{Router, body::Body, http::Request, http::header::CONTENT_TYPE, response::Response};
use common::{config::Config, state::AppState};
use db::models::user::Model as UserModel;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::sync::Once;

static INIT: Once = Once::new();

/// Seeds the process environment once so [`Config`] can load without a
/// `.env` file on the test machine.
pub fn init_test_env() {
    INIT.call_once(|| {
        dotenvy::dotenv().ok();
        unsafe {
            std::env::set_var("JWT_SECRET", "test-secret-not-for-production");
            std::env::set_var("DATABASE_PATH", "tmp/test.db");
            std::env::set_var("APP_ENV", "test");
            std::env::set_var("LOG_FILE", "tmp/test-api.log");
            std::env::set_var("USER_STORAGE_ROOT", "tmp/test_user_storage");
        }
        Config::get_or_load();
    });
}

pub fn make_app(db: DatabaseConnection) -> Router {
    init_test_env();
    Router::new().nest("/api", routes(AppState::new(db)))
}

pub async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Creates a user and a matching bearer token.
pub async fn create_user_with_token(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    admin: bool,
) -> (UserModel, String) {
    init_test_env();
    let user = UserModel::create(db, name, email, "password123", admin)
        .await
        .expect("Failed to create user");
    let (token, _) = generate_jwt(user.id, user.admin);
    (user, token)
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, payload: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn delete_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}
