//! # Film Auth
//!
//! Session claims and bearer token utilities for the Film API.
//!
//! - [`claims`]: The identity embedded in every token
//! - [`jwt`]: Token issuance and verification (HS256)
//!
//! # Example
//!
//! ```ignore
//! use film_auth::{SessionUser, issue_token, verify_token};
//! use film_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = issue_token(&user, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.user.username, user.username);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::{Claims, SessionUser};
pub use jwt::{issue_token, verify_token};
