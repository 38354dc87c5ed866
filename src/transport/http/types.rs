use crate::domain::Product;
use crate::storage::ProductStorage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Shared handler state. Cloned per request; holds no mutable data.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductStorage>,
}

impl AppState {
    pub fn new(products: impl ProductStorage + 'static) -> Self {
        Self {
            products: Arc::new(products),
        }
    }
}

/// Response envelope used by every endpoint.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub message: String,
    /// `null` on every error and on successful deletes.
    pub data: Option<ProductResponse>,
    pub error: bool,
}

/// Serialized product. `id` is left out of `GET /products/{id}` responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProductResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub count: i32,
    pub price: f64,
}

impl ProductResponse {
    pub fn without_id(p: &Product) -> Self {
        Self {
            id: None,
            name: p.name.clone(),
            r#type: p.r#type.clone(),
            count: p.count,
            price: p.price,
        }
    }

    pub fn with_id(p: &Product) -> Self {
        Self {
            id: Some(p.id),
            ..Self::without_id(p)
        }
    }
}

/// Body of `POST /products`. Omitted (or `null`) fields take their zero value.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct ProductRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub count: Option<i32>,
    pub price: Option<f64>,
}

impl From<ProductRequest> for Product {
    fn from(req: ProductRequest) -> Self {
        Product::new(
            req.name.unwrap_or_default(),
            req.r#type.unwrap_or_default(),
            req.count.unwrap_or_default(),
            req.price.unwrap_or_default(),
        )
    }
}

/// Body of `PUT`/`PATCH /products/{id}`.
///
/// Fields that are omitted (or `null`) keep the stored value.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct ProductPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub count: Option<i32>,
    pub price: Option<f64>,
}

impl ProductPatch {
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(t) = self.r#type {
            product.r#type = t;
        }
        if let Some(count) = self.count {
            product.count = count;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }
}
