//! # Film Core
//!
//! Core types shared by every Film API crate.
//!
//! - [`errors`]: Application error taxonomy with HTTP response conversion
//! - [`password`]: Password hashing and verification
//! - [`serde`]: Lenient request-body deserializers
//!
//! # Example
//!
//! ```ignore
//! use film_core::{AppError, hash_password, verify_password};
//!
//! let digest = hash_password("rahasia123").await?;
//! assert!(verify_password("rahasia123", &digest).await?);
//!
//! let error = AppError::not_found("Film tidak ditemukan");
//! ```

pub mod errors;
pub mod password;
pub mod serde;

pub use errors::{AppError, ErrorKind, INTERNAL_ERROR_MESSAGE};
pub use password::{hash_password, verify_password};
