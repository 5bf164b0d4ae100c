//! # Film CLI
//!
//! Administrative operations that bypass the HTTP surface.
//!
//! ## Usage
//!
//! ```ignore
//! use film_cli::create_admin;
//!
//! let admin = create_admin(&gateway, "root", "rahasia123").await?;
//! ```

use anyhow::{Context, bail};
use film_core::hash_password;
use film_db::{Gateway, StoreError};
use film_models::{NewUser, Role, UserRecord, normalize_username};

/// Same lower bound the registration endpoint enforces.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Creates an account with the admin role.
pub async fn create_admin(
    gateway: &Gateway,
    username: &str,
    password: &str,
) -> anyhow::Result<UserRecord> {
    let username = normalize_username(username);
    if username.is_empty() {
        bail!("Username must not be empty");
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        bail!("Password must be at least {} characters", MIN_PASSWORD_LENGTH);
    }

    let password_hash = hash_password(password)
        .await
        .map_err(|e| e.error)?;

    match gateway
        .users
        .insert_user(NewUser {
            username: username.clone(),
            password_hash,
            role: Role::Admin,
        })
        .await
    {
        Ok(user) => Ok(user),
        Err(StoreError::UniqueViolation) => bail!("Username '{}' is already taken", username),
        Err(e) => Err(e).context("Failed to create admin"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use film_core::verify_password;

    #[tokio::test]
    async fn test_create_admin_normalizes_and_hashes() {
        let gateway = Gateway::document();
        let admin = create_admin(&gateway, "  Root ", "rahasia123").await.unwrap();

        assert_eq!(admin.username, "root");
        assert_eq!(admin.role, Role::Admin);
        assert!(verify_password("rahasia123", &admin.password_hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_admin_rejects_duplicates_and_short_passwords() {
        let gateway = Gateway::document();
        create_admin(&gateway, "root", "rahasia123").await.unwrap();

        assert!(create_admin(&gateway, "ROOT", "rahasia123").await.is_err());
        assert!(create_admin(&gateway, "other", "12345").await.is_err());
        assert!(create_admin(&gateway, "   ", "rahasia123").await.is_err());
    }
}
