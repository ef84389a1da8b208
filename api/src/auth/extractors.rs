use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::extract::TypedHeader;
use common::config::Config;
use headers::{Authorization, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crate::auth::claims::{AuthUser, Claims};
use crate::response::ApiResponse;

/// Extracts an [`AuthUser`] from the `Authorization: Bearer` header.
///
/// Verification is purely cryptographic; the claims are trusted as of
/// issuance and no user record is fetched here. A missing, malformed,
/// expired, or badly signed token is rejected with `401` in the standard
/// envelope.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ApiResponse<()>>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(ApiResponse::error("Missing or invalid Authorization header")),
                    )
                })?;

        let token_data = decode::<Claims>(
            bearer.token(),
            &DecodingKey::from_secret(Config::get().jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Invalid or expired token")),
            )
        })?;

        Ok(AuthUser(token_data.claims))
    }
}
