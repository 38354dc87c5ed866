//! Database bootstrap.
//!
//! Owns the connection pool for the lifetime of the process and makes sure the
//! `products` table exists before the first request is served.

use crate::infra::config::AppConfig;
use crate::storage::postgres::CREATE_PRODUCTS_TABLE_SQL;
use crate::storage::PostgresProductStorage;
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub struct DatabaseService {
    pool: PgPool,
}

impl DatabaseService {
    /// Connects using `config` and bootstraps the schema.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .context("failed to connect to DATABASE_URL")?;

        let service = Self { pool };
        service.ensure_schema().await?;
        Ok(service)
    }

    /// Wraps an existing pool without touching the schema.
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(CREATE_PRODUCTS_TABLE_SQL)
            .execute(&self.pool)
            .await
            .context("failed to create products table")?;
        Ok(())
    }

    /// Returns true if the `products` table is present in the current schema.
    pub async fn products_table_exists(&self) -> anyhow::Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = current_schema() AND table_name = 'products'
            )",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Storage engine sharing this service's pool.
    pub fn product_storage(&self) -> PostgresProductStorage {
        PostgresProductStorage::new(self.pool.clone())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
