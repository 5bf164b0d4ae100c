//! Password hashing and verification backed by bcrypt.
//!
//! bcrypt is CPU-bound, so both operations run on the blocking pool and the
//! calling task yields until the digest is ready.
//!
//! The minimum password length is enforced by request validation, not here.

use bcrypt::{hash, verify};
use tokio::task::spawn_blocking;

use crate::errors::AppError;

/// bcrypt work factor used for every stored digest.
pub const HASH_COST: u32 = 10;

pub async fn hash_password(password: &str) -> Result<String, AppError> {
    let password = password.to_owned();
    spawn_blocking(move || hash(password, HASH_COST))
        .await
        .map_err(|e| AppError::internal_error(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| AppError::internal_error(format!("Failed to hash password: {}", e)))
}

/// Returns `Ok(false)` on mismatch; only a malformed digest is an error.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    spawn_blocking(move || verify(password, &hash))
        .await
        .map_err(|e| {
            AppError::internal_error(format!("Password verification task failed: {}", e))
        })?
        .map_err(|e| AppError::internal_error(format!("Failed to verify password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hash = hash_password("rahasia123").await.unwrap();
        assert_ne!(hash, "rahasia123");
        assert!(verify_password("rahasia123", &hash).await.unwrap());
        assert!(!verify_password("salah123", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hash_uses_configured_cost() {
        let hash = hash_password("rahasia123").await.unwrap();
        assert!(hash.starts_with("$2b$10$"));
    }

    #[tokio::test]
    async fn test_verify_malformed_digest_is_error() {
        assert!(verify_password("rahasia123", "not-a-bcrypt-digest").await.is_err());
    }

    #[tokio::test]
    async fn test_hashing_yields_to_other_tasks() {
        let order = Arc::new(Mutex::new(Vec::new()));

        let hashing = {
            let order = order.clone();
            tokio::spawn(async move {
                hash_password("rahasia123").await.unwrap();
                order.lock().unwrap().push("hash");
            })
        };
        let other = {
            let order = order.clone();
            tokio::spawn(async move {
                order.lock().unwrap().push("other");
            })
        };

        hashing.await.unwrap();
        other.await.unwrap();
        assert_eq!(*order.lock().unwrap(), vec!["other", "hash"]);
    }
}
