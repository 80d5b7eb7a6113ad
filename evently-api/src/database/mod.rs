pub mod bookings;
pub mod event_spaces;

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::DatabaseConfig;

/// Errors surfaced by the store layer
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Raised by a backing procedure (`RAISE EXCEPTION` and friends); the
    /// message is meant for the caller.
    #[error("{0}")]
    Procedure(String),
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(db_err) => StoreError::Procedure(db_err.message().to_string()),
            other => StoreError::Database(other.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    /// Builds a lazily connected pool; no connection is opened until first use
    pub fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_lazy(&config.url)?;

        Ok(Self { pool })
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
