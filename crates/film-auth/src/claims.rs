//! Token claim structures.
//!
//! A token carries the caller's identity under a `user` key, alongside the
//! standard `exp` and `iat` timestamps. Claims are never persisted and there
//! is no revocation list: a token is valid until it expires.

use film_models::{RecordId, Role, UserRecord};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity of an authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    pub id: RecordId,
    pub username: String,
    pub role: Role,
}

impl From<&UserRecord> for SessionUser {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub user: SessionUser,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}
