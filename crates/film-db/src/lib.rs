//! # Film DB
//!
//! The persistence gateway for the Film API and its two storage backends.
//!
//! - [`gateway`]: Backend-neutral store traits and the [`Gateway`] bundle
//! - [`postgres`]: Relational backend (SQLx + PostgreSQL, integer ids)
//! - [`document`]: Document backend (in-process collections, object ids)
//! - [`seed`]: Sample data inserted into empty stores
//!
//! Handlers depend only on [`Gateway`]; which backend sits behind it is
//! decided once, from [`StoreConfig`], when the process starts.
//!
//! # Example
//!
//! ```ignore
//! use film_config::StoreConfig;
//! use film_db::Gateway;
//!
//! let gateway = Gateway::connect(&StoreConfig::from_env()?).await?;
//! let movies = gateway.movies.find_all().await?;
//! ```

pub mod document;
pub mod gateway;
pub mod postgres;
pub mod seed;

use film_config::{StoreBackend, StoreConfig};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

pub use gateway::{Gateway, Resource, ResourceStore, StoreError, UserStore};
pub use sqlx::PgPool;

/// Connects to PostgreSQL and applies pending migrations.
pub async fn init_db_pool(database_url: &str, max_connections: u32) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("../../migrations").run(&pool).await?;

    Ok(pool)
}

impl Gateway {
    /// Builds the gateway for the configured backend.
    pub async fn connect(config: &StoreConfig) -> anyhow::Result<Self> {
        let gateway = match config.backend {
            StoreBackend::Postgres => {
                let database_url = config
                    .database_url
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?;
                let pool = init_db_pool(database_url, config.max_connections).await?;
                Gateway::postgres(pool)
            }
            StoreBackend::Document => Gateway::document(),
        };

        info!(backend = %gateway.backend(), "Persistence gateway ready");

        if config.seed_on_start {
            let report = seed::seed_samples(&gateway).await?;
            info!(
                movies = report.movies,
                directors = report.directors,
                "Seeded sample data"
            );
        }

        Ok(gateway)
    }
}
