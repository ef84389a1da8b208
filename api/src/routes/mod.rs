//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by domain, one directory per resource. Access
//! control is a mix of a group-level authentication layer (assignments,
//! quizzes, user profile routes) and per-operation checks inside handlers
//! (ownership on assignments and quizzes, admin role on the content
//! hierarchy), with existence checks always evaluated before authorization.

use axum::Router;
use common::state::AppState;

pub mod assignments;
pub mod auth;
pub mod health;
pub mod modules;
pub mod outlines;
pub mod quizzes;
pub mod subjects;
pub mod users;
pub mod videos;

/// Builds the complete application router for all HTTP endpoints.
///
/// # Route Structure:
/// - `/health` → Health check endpoint (public).
/// - `/auth` → Signup, signin, current-user; `make-admin` is mounted only
///   outside production.
/// - `/users` → Profile, points, and achievement endpoints (authenticated;
///   avatar retrieval is public).
/// - `/assignments`, `/quizzes` → Owner-scoped records (authenticated).
/// - `/subjects`, `/outlines`, `/modules`, `/videos` → Content hierarchy;
///   reads are public, mutations require the admin role.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health::health_routes())
        .nest("/auth", auth::auth_routes())
        .nest("/users", users::users_routes())
        .nest("/assignments", assignments::assignment_routes())
        .nest("/quizzes", quizzes::quiz_routes())
        .nest("/subjects", subjects::subject_routes())
        .nest("/outlines", outlines::outline_routes())
        .nest("/modules", modules::module_routes())
        .nest("/videos", videos::video_routes())
        .with_state(app_state)
}
