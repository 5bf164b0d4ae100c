//! Role gate.
//!
//! Exactly one role is required per gated route and it must match the
//! caller's role exactly; there is no role hierarchy.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use film_core::AppError;
use film_models::Role;

use crate::middleware::auth::AuthUser;

pub fn check_role(auth_user: &AuthUser, required: Role) -> Result<(), AppError> {
    if auth_user.role() == required {
        Ok(())
    } else {
        Err(AppError::forbidden())
    }
}

/// Rejects with 403 unless [`AuthUser`] is attached and carries `required`.
pub async fn require_role(
    State(required): State<Role>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = req
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(AppError::forbidden)?;

    if let Err(e) = check_role(auth_user, required) {
        tracing::warn!(
            username = %auth_user.username(),
            role = %auth_user.role(),
            required = %required,
            "Role check failed"
        );
        return Err(e);
    }

    Ok(next.run(req).await)
}
