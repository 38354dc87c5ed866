//! Product storage: the trait the HTTP layer depends on and its PostgreSQL
//! implementation.

pub mod error;
pub mod postgres;

pub use error::{StorageError, StorageResult};
pub use postgres::{PostgresProductStorage, ProductRow};

use crate::domain::Product;
use async_trait::async_trait;

/// Contract for any product store.
///
/// Each operation is a single statement against the backing store. Partial
/// updates are not supported here: `update` overwrites every mutable field.
#[async_trait]
pub trait ProductStorage: Send + Sync {
    /// Looks up a product by id. Fails with `NotFound` if no row matches.
    async fn fetch_by_id(&self, id: i64) -> StorageResult<Product>;

    /// Persists a new product and writes the generated id back into it.
    async fn insert(&self, product: &mut Product) -> StorageResult<()>;

    /// Overwrites name/type/count/price of the row matching `product.id`.
    async fn update(&self, product: &Product) -> StorageResult<()>;

    /// Removes the row matching `id`.
    async fn delete(&self, id: i64) -> StorageResult<()>;

    /// Cheap connectivity check used by the health probe.
    async fn ping(&self) -> StorageResult<()>;
}
