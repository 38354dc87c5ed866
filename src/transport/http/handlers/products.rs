//! CRUD handlers for `/products`.
//!
//! Handlers never see driver errors: they only match on `StorageError`
//! variants and map each to a fixed status code.

use crate::domain::Product;
use crate::storage::StorageError;
use crate::transport::http::handlers::common::{
    internal_error, invalid_json, product_id, product_not_found, product_not_unique, success,
    Reply,
};
use crate::transport::http::types::{
    ApiResponse, AppState, ProductPatch, ProductRequest, ProductResponse,
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found (id is not included)", body = ApiResponse),
        (status = 400, description = "Missing or non-integer id", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Reply, Reply> {
    let id = product_id(path)?;

    let product = state.products.fetch_by_id(id).await.map_err(|e| match e {
        StorageError::NotFound => product_not_found(),
        e => internal_error("fetch product", &e),
    })?;

    Ok(success(StatusCode::OK, Some(ProductResponse::without_id(&product))))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse),
        (status = 400, description = "Invalid JSON or duplicate name", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn store_product_handler(
    State(state): State<AppState>,
    request: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Reply, Reply> {
    let Json(request) = request.map_err(invalid_json)?;
    let mut product = Product::from(request);

    state.products.insert(&mut product).await.map_err(|e| match e {
        StorageError::NotUnique(_) => product_not_unique(&e),
        e => internal_error("insert product", &e),
    })?;

    tracing::info!(id = product.id, name = %product.name, "product created");
    Ok(success(StatusCode::CREATED, Some(ProductResponse::with_id(&product))))
}

/// Reads the current record, patches the supplied fields over it, then
/// overwrites the whole row. The sequence is not atomic.
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "Product updated (PATCH behaves the same)", body = ApiResponse),
        (status = 400, description = "Bad id, invalid JSON or duplicate name", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    patch: Result<Json<ProductPatch>, JsonRejection>,
) -> Result<Reply, Reply> {
    let id = product_id(path)?;

    let mut product = state.products.fetch_by_id(id).await.map_err(|e| match e {
        StorageError::NotFound => product_not_found(),
        e => internal_error("fetch product", &e),
    })?;

    let Json(patch) = patch.map_err(invalid_json)?;
    patch.apply_to(&mut product);
    product.id = id;

    state.products.update(&product).await.map_err(|e| match e {
        StorageError::NotFound => product_not_found(),
        StorageError::NotUnique(_) => product_not_unique(&e),
        e => internal_error("update product", &e),
    })?;

    tracing::info!(id, "product updated");
    Ok(success(StatusCode::OK, Some(ProductResponse::with_id(&product))))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted (data is null)", body = ApiResponse),
        (status = 400, description = "Missing or non-integer id", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Reply, Reply> {
    let id = product_id(path)?;

    state.products.delete(id).await.map_err(|e| match e {
        StorageError::NotFound => product_not_found(),
        e => internal_error("delete product", &e),
    })?;

    tracing::info!(id, "product deleted");
    Ok(success(StatusCode::OK, None))
}
