use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::{format_validation_errors, state::AppState};
use db::models::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::generate_jwt;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100, message = "Please provide a name"))]
    pub name: String,

    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(length(min = 1, message = "Please provide an email and password"))]
    pub email: String,

    #[validate(length(min = 1, message = "Please provide an email and password"))]
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct AuthResponse {
    pub token: String,
    pub expires_at: String,
    pub user: Option<UserModel>,
}

/// POST /api/auth/signup
///
/// Register a new user and issue a signed bearer token.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Alice Example",
///   "email": "alice@example.com",
///   "password": "strongpassword"
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created` - token, expiry, and the created user (no password).
/// - `400 Bad Request` - validation failure.
/// - `409 Conflict` - email already registered.
/// - `500 Internal Server Error` - database failure, message surfaced.
pub async fn signup(
    State(app_state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<AuthResponse>::error(format_validation_errors(
                &validation_errors,
            ))),
        );
    }

    let db = app_state.db();

    match UserModel::find_by_email(db, &req.email).await {
        Ok(Some(_)) => {
            return (
                StatusCode::CONFLICT,
                Json(ApiResponse::<AuthResponse>::error("Email already in use")),
            );
        }
        Ok(None) => {}
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<AuthResponse>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    }

    match UserModel::create(db, &req.name, &req.email, &req.password, false).await {
        Ok(user) => {
            let (token, expires_at) = generate_jwt(user.id, user.admin);
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    AuthResponse {
                        token,
                        expires_at,
                        user: Some(user),
                    },
                    "User registered successfully",
                )),
            )
        }
        Err(e) => {
            // The uniqueness check above races with concurrent signups; the
            // constraint is authoritative.
            if e.to_string().contains("UNIQUE constraint failed") {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<AuthResponse>::error("Email already in use")),
                );
            }
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<AuthResponse>::error(format!(
                    "Database error: {e}"
                ))),
            )
        }
    }
}

/// POST /api/auth/signin
///
/// Authenticate an existing user and issue a bearer token.
///
/// An unknown email and a wrong password produce the identical response,
/// so the endpoint cannot be used to probe which addresses have accounts.
///
/// ### Responses
///
/// - `200 OK` - token, expiry, and the user profile.
/// - `400 Bad Request` - empty email or password.
/// - `401 Unauthorized` - `"Invalid credentials"` in both failure cases.
pub async fn signin(
    State(app_state): State<AppState>,
    Json(req): Json<SigninRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<AuthResponse>::error(format_validation_errors(
                &validation_errors,
            ))),
        );
    }

    match UserModel::verify_credentials(app_state.db(), &req.email, &req.password).await {
        Ok(Some(user)) => {
            let (token, expires_at) = generate_jwt(user.id, user.admin);
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    AuthResponse {
                        token,
                        expires_at,
                        user: Some(user),
                    },
                    "Login successful",
                )),
            )
        }
        Ok(None) => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<AuthResponse>::error("Invalid credentials")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<AuthResponse>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
