pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::database_service::DatabaseService;
pub use domain::Product;
pub use infra::AppConfig;
pub use storage::{PostgresProductStorage, ProductStorage, StorageError, StorageResult};
