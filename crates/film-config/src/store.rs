//! Persistence backend selection.
//!
//! The backend is chosen once at startup; handlers never branch on it.
//!
//! # Environment Variables
//!
//! - `STORE_BACKEND`: `postgres` (default) or `document`
//! - `DATABASE_URL`: PostgreSQL connection string, required for `postgres`
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)
//! - `SEED_ON_START`: insert sample movies and directors into an empty store

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::env_or;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    /// Relational tables with auto-incrementing integer ids.
    Postgres,
    /// Document collections with ObjectId-style hex ids.
    Document,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "sql" => Ok(StoreBackend::Postgres),
            "document" | "mongo" | "memory" => Ok(StoreBackend::Document),
            other => Err(format!("unknown STORE_BACKEND: {}", other)),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Postgres => write!(f, "postgres"),
            StoreBackend::Document => write!(f, "document"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub seed_on_start: bool,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, String> {
        let backend = match env::var("STORE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => StoreBackend::Postgres,
        };
        let database_url = env::var("DATABASE_URL").ok().filter(|s| !s.is_empty());

        if backend == StoreBackend::Postgres && database_url.is_none() {
            return Err("DATABASE_URL must be set when STORE_BACKEND=postgres".to_string());
        }

        Ok(Self {
            backend,
            database_url,
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", 5),
            seed_on_start: env_or("SEED_ON_START", false),
        })
    }

    /// In-process document store, used by tests and local runs.
    pub fn document() -> Self {
        Self {
            backend: StoreBackend::Document,
            database_url: None,
            max_connections: 1,
            seed_on_start: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend() {
        assert_eq!("postgres".parse::<StoreBackend>(), Ok(StoreBackend::Postgres));
        assert_eq!("Document".parse::<StoreBackend>(), Ok(StoreBackend::Document));
        assert_eq!("mongo".parse::<StoreBackend>(), Ok(StoreBackend::Document));
        assert!("sqlite".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_backend_display_round_trips() {
        for backend in [StoreBackend::Postgres, StoreBackend::Document] {
            assert_eq!(backend.to_string().parse::<StoreBackend>(), Ok(backend));
        }
    }
}
