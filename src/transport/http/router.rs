use crate::transport::http::handlers::{health, products};
use crate::transport::http::types::{
    ApiResponse, AppState, ProductPatch, ProductRequest, ProductResponse,
};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        products::get_product_handler,
        products::store_product_handler,
        products::update_product_handler,
        products::delete_product_handler
    ),
    components(schemas(ApiResponse, ProductResponse, ProductRequest, ProductPatch))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    let by_id = get(products::get_product_handler)
        .put(products::update_product_handler)
        .patch(products::update_product_handler)
        .delete(products::delete_product_handler);

    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/products", post(products::store_product_handler))
        // `/products/` has no id segment; the handlers answer it with 400.
        .route("/products/", by_id.clone())
        .route("/products/:id", by_id)
        .with_state(app_state)
}
