//! # Film Config
//!
//! Configuration types for the Film API, loaded from environment variables.
//!
//! - [`jwt`]: Token signing configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`store`]: Persistence backend selection
//! - [`server`]: Listen address
//! - [`log`]: Log file location
//!
//! # Example
//!
//! ```ignore
//! use film_config::{CorsConfig, JwtConfig, ServerConfig, StoreConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let store_config = StoreConfig::from_env()?;
//! ```

pub mod cors;
pub mod jwt;
pub mod log;
pub mod server;
pub mod store;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use log::LogConfig;
pub use server::ServerConfig;
pub use store::{StoreBackend, StoreConfig};

/// Reads a variable and parses it, falling back to `default` when unset or unparsable.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
