use axum::{
    Json,
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use db::models::user::Model as UserModel;
use sea_orm::DatabaseConnection;

use crate::auth::claims::{AuthUser, Claims};
use crate::response::ApiResponse;

/// Extracts and validates the user from the request, then reinserts it into
/// the request extensions for downstream handlers.
async fn extract_and_insert_authuser(
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), (StatusCode, Json<ApiResponse<()>>)> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Authentication required")),
            )
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Route layer for groups where every operation requires authentication.
pub async fn allow_authenticated(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<()>>)> {
    let (req, _user) = extract_and_insert_authuser(req).await?;

    Ok(next.run(req).await)
}

/// Resolves the acting principal to its current user row and requires the
/// admin flag to hold **now**, not merely at token issuance. A demoted
/// admin is rejected here even while their token is still valid.
pub async fn require_admin(
    db: &DatabaseConnection,
    claims: &Claims,
) -> Result<UserModel, (StatusCode, Json<ApiResponse<()>>)> {
    let user = UserModel::find_by_id(db, claims.sub).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {e}"))),
        )
    })?;

    match user {
        Some(user) if user.admin => Ok(user),
        Some(_) => Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Admin access required")),
        )),
        None => Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Account no longer exists")),
        )),
    }
}
