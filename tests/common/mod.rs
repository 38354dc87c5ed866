//! Shared helpers for the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use products_api::{Product, ProductStorage, StorageError, StorageResult};
use rand::Rng;
use serde_json::Value as JsonValue;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use tower::ServiceExt;

/// In-memory `ProductStorage` with the same observable contract as the
/// Postgres store: generated ids, unique non-empty names, and row-count based
/// `NotFound` on update/delete.
#[derive(Default)]
pub struct InMemoryProductStorage {
    rows: Mutex<BTreeMap<i64, Product>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
    broken: AtomicBool,
}

impl InMemoryProductStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of storage calls made so far (ping excluded).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Makes every subsequent call fail with `Internal`.
    pub fn break_backend(&self) {
        self.broken.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn enter(&self) -> StorageResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.broken.load(Ordering::SeqCst) {
            return Err(StorageError::internal("backend unavailable"));
        }
        Ok(())
    }

    fn name_taken(rows: &BTreeMap<i64, Product>, name: &str, except: i64) -> bool {
        !name.is_empty() && rows.values().any(|p| p.id != except && p.name == name)
    }
}

#[async_trait]
impl ProductStorage for InMemoryProductStorage {
    async fn fetch_by_id(&self, id: i64) -> StorageResult<Product> {
        self.enter()?;
        self.rows
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn insert(&self, product: &mut Product) -> StorageResult<()> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        if Self::name_taken(&rows, &product.name, 0) {
            return Err(StorageError::NotUnique(format!(
                "duplicate name '{}'",
                product.name
            )));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        product.id = id;
        rows.insert(id, product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> StorageResult<()> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&product.id) {
            return Err(StorageError::NotFound);
        }
        if Self::name_taken(&rows, &product.name, product.id) {
            return Err(StorageError::NotUnique(format!(
                "duplicate name '{}'",
                product.name
            )));
        }
        rows.insert(product.id, product.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        self.enter()?;
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound)
    }

    async fn ping(&self) -> StorageResult<()> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(StorageError::internal("backend unavailable"));
        }
        Ok(())
    }
}

/// Sends one request through the router and decodes the JSON reply.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, JsonValue) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, json)
}

/// Connects to `DATABASE_URL` if it is configured; `None` means "skip".
pub async fn pg_pool_from_env() -> Option<PgPool> {
    dotenv::dotenv().ok();
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            eprintln!("DATABASE_URL not set; skipping Postgres-backed test");
            return None;
        }
    };
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("DATABASE_URL is set but the database is unreachable");
    Some(pool)
}

/// Product name that will not collide across test runs.
pub fn unique_name(prefix: &str) -> String {
    let suffix: u64 = rand::thread_rng().gen();
    format!("{}-{:x}", prefix, suffix)
}
