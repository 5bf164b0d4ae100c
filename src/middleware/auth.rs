use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use film_auth::{Claims, SessionUser, verify_token};
use film_core::AppError;
use film_models::Role;

use crate::state::AppState;

/// Claims of the authenticated caller, attached by [`authenticate`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user(&self) -> &SessionUser {
        &self.0.user
    }

    pub fn role(&self) -> Role {
        self.0.user.role
    }

    pub fn username(&self) -> &str {
        &self.0.user.username
    }
}

/// The token from an `Authorization: Bearer <token>` header.
///
/// Any other scheme, or no header at all, is a missing-auth error. An empty
/// token after the prefix is returned as is and fails verification later.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(AppError::missing_auth)
}

/// Verifies the bearer token and stores an [`AuthUser`] in the request extensions.
///
/// Missing header: 401. Present but unverifiable token: 403.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = verify_token(bearer_token(req.headers())?, &state.jwt_config)?;

    tracing::debug!(username = %claims.user.username, role = %claims.user.role, "Authenticated");
    req.extensions_mut().insert(AuthUser(claims));

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(AppError::missing_auth)
    }
}
