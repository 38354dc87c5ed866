//! Product store implementation using PostgreSQL.

use crate::domain::Product;
use crate::storage::{ProductStorage, StorageError, StorageResult};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

/// Schema of the `products` table. Every mutable column is nullable.
pub const CREATE_PRODUCTS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS products (
    id BIGSERIAL PRIMARY KEY,
    name TEXT UNIQUE,
    type TEXT,
    count INTEGER,
    price DOUBLE PRECISION
)";

const SELECT_BY_ID_SQL: &str = "SELECT id, name, type, count, price FROM products WHERE id = $1";
const INSERT_SQL: &str =
    "INSERT INTO products (name, type, count, price) VALUES ($1, $2, $3, $4) RETURNING id";
const UPDATE_SQL: &str =
    "UPDATE products SET name = $1, type = $2, count = $3, price = $4 WHERE id = $5";
const DELETE_SQL: &str = "DELETE FROM products WHERE id = $1";

/// Column-level view of a product row.
///
/// Writing goes through `From<&Product>`, which stores a field as NULL when it
/// holds its zero value. Reading goes through `From<ProductRow>`, which turns
/// NULL back into the zero value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductRow {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub r#type: Option<String>,
    pub count: Option<i32>,
    pub price: Option<f64>,
}

impl ProductRow {
    fn from_pg_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            r#type: row.try_get("type")?,
            count: row.try_get("count")?,
            price: row.try_get("price")?,
        })
    }
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: (p.id != 0).then_some(p.id),
            name: (!p.name.is_empty()).then(|| p.name.clone()),
            r#type: (!p.r#type.is_empty()).then(|| p.r#type.clone()),
            count: (p.count != 0).then_some(p.count),
            price: (p.price != 0.0).then_some(p.price),
        }
    }
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id.unwrap_or_default(),
            name: row.name.unwrap_or_default(),
            r#type: row.r#type.unwrap_or_default(),
            count: row.count.unwrap_or_default(),
            price: row.price.unwrap_or_default(),
        }
    }
}

/// A product store backed by a PostgreSQL connection pool.
///
/// The pool handle is shared; its lifecycle belongs to whoever built it.
#[derive(Clone)]
pub struct PostgresProductStorage {
    pool: PgPool,
}

impl PostgresProductStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductStorage for PostgresProductStorage {
    async fn fetch_by_id(&self, id: i64) -> StorageResult<Product> {
        let row = sqlx::query(SELECT_BY_ID_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        let row = ProductRow::from_pg_row(&row)?;
        tracing::debug!(id, "fetched product");
        Ok(row.into())
    }

    async fn insert(&self, product: &mut Product) -> StorageResult<()> {
        let row = ProductRow::from(&*product);

        let rows = sqlx::query(INSERT_SQL)
            .bind(row.name)
            .bind(row.r#type)
            .bind(row.count)
            .bind(row.price)
            .fetch_all(&self.pool)
            .await?;

        if rows.len() != 1 {
            return Err(StorageError::internal(format!(
                "rows affected != 1 (got {})",
                rows.len()
            )));
        }

        let id: i64 = rows[0].try_get("id")?;
        product.id = id;
        tracing::debug!(id, "inserted product");
        Ok(())
    }

    async fn update(&self, product: &Product) -> StorageResult<()> {
        let row = ProductRow::from(product);

        let result = sqlx::query(UPDATE_SQL)
            .bind(row.name)
            .bind(row.r#type)
            .bind(row.count)
            .bind(row.price)
            .bind(product.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() != 1 {
            return Err(StorageError::NotFound);
        }
        tracing::debug!(id = product.id, "updated product");
        Ok(())
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let result = sqlx::query(DELETE_SQL)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() != 1 {
            return Err(StorageError::NotFound);
        }
        tracing::debug!(id, "deleted product");
        Ok(())
    }

    async fn ping(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
