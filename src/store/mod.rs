//! Record store backed by PostgreSQL.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DbConfig;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("schema creation failed: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),
}

/// One row of the `users` table. Ids are store-assigned and monotonic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Store operations exposed to request handlers. Behind a trait so tests can
/// swap in a fake store without a running database.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;
    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError>;
    async fn insert_user(&self, name: &str, email: &str) -> Result<UserRecord, StoreError>;
}

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Open a connection pool and verify liveness with a ping. Fails fast if
    /// the database is unreachable.
    pub async fn connect(cfg: &DbConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(&cfg.url())
            .await
            .map_err(StoreError::Connection)?;

        let store = Self { pool };
        store.ping().await?;
        info!(host = %cfg.host, db = %cfg.name, "database connected");
        Ok(store)
    }

    /// Create the `users` table and its primary-key index if absent. Safe to
    /// call repeatedly.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id SERIAL PRIMARY KEY,
                name VARCHAR(256),
                email VARCHAR(256)
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(StoreError::Schema)?;

        sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS users_pkey ON users (id)")
            .execute(&self.pool)
            .await
            .map_err(StoreError::Schema)?;

        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(StoreError::Connection)?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        // No ORDER BY: row order is whatever the store yields.
        sqlx::query_as::<_, UserRecord>("SELECT id, name, email FROM users")
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::Query)
    }

    async fn insert_user(&self, name: &str, email: &str) -> Result<UserRecord, StoreError> {
        sqlx::query_as::<_, UserRecord>(
            "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email",
        )
        .bind(name)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::Query)
    }
}
