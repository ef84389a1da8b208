pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::{AuthUser, Claims};

use chrono::{Duration, Utc};
use common::config::Config;
use jsonwebtoken::{EncodingKey, Header, encode};

/// Generates a signed bearer token and its expiry timestamp for a user.
///
/// The signing secret comes from the startup [`Config`]; a missing secret
/// already failed the process at config load, so encoding here cannot hit
/// that case.
pub fn generate_jwt(user_id: i64, admin: bool) -> (String, String) {
    let config = Config::get();
    let expiry = Utc::now() + Duration::days(config.jwt_duration_days);

    let claims = Claims {
        sub: user_id,
        admin,
        exp: expiry.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .expect("Token encoding failed");

    (token, expiry.to_rfc3339())
}
