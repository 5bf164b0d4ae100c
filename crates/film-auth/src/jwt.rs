//! Bearer token issuance and verification.
//!
//! Verification does not distinguish why a token was rejected: a bad
//! signature, a malformed token and an expired token all produce the same
//! [`AppError::invalid_token`].

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use film_config::JwtConfig;
use film_core::AppError;

use crate::claims::{Claims, SessionUser};

/// Issues a token for `user` that expires `jwt_config.token_expiry` seconds from now.
///
/// # Errors
///
/// Returns an internal error if the lifetime is not positive or encoding fails.
pub fn issue_token(user: &SessionUser, jwt_config: &JwtConfig) -> Result<String, AppError> {
    if jwt_config.token_expiry <= 0 {
        return Err(AppError::internal_error(format!(
            "Token lifetime must be positive, got {}",
            jwt_config.token_expiry
        )));
    }

    let now = Utc::now().timestamp();
    let exp = now
        .checked_add(jwt_config.token_expiry)
        .and_then(|exp| usize::try_from(exp).ok())
        .ok_or_else(|| AppError::internal_error("Token expiry out of range"))?;
    let now = usize::try_from(now)
        .map_err(|_| AppError::internal_error("System clock is before the epoch"))?;

    let claims = Claims {
        user: user.clone(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry and returns the embedded claims.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::invalid_token())
}
