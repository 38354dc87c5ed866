use crate::storage::StorageError;
use crate::transport::http::types::{ApiResponse, ProductResponse};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;

/// Every handler answers with a status code and the envelope, on both paths.
pub type Reply = (StatusCode, Json<ApiResponse>);

pub fn reply(
    status: StatusCode,
    message: &str,
    data: Option<ProductResponse>,
    error: bool,
) -> Reply {
    (
        status,
        Json(ApiResponse {
            message: message.to_string(),
            data,
            error,
        }),
    )
}

pub fn success(status: StatusCode, data: Option<ProductResponse>) -> Reply {
    reply(status, "success", data, false)
}

pub fn failure(status: StatusCode, message: &str) -> Reply {
    reply(status, message, None, true)
}

/// Extracts the product id from the last path segment.
pub fn product_id(path: Result<Path<String>, PathRejection>) -> Result<i64, Reply> {
    let raw = path.ok().map(|Path(raw)| raw);
    parse_product_id(raw.as_deref())
}

pub fn parse_product_id(raw: Option<&str>) -> Result<i64, Reply> {
    let raw = match raw {
        Some(r) if !r.is_empty() => r,
        _ => return Err(failure(StatusCode::BAD_REQUEST, "invalid path param")),
    };
    raw.parse::<i64>()
        .map_err(|_| failure(StatusCode::BAD_REQUEST, "parameter must be int"))
}

pub fn invalid_json(err: JsonRejection) -> Reply {
    tracing::debug!(error = %err, "rejected request body");
    failure(StatusCode::BAD_REQUEST, "invalid json")
}

pub fn product_not_found() -> Reply {
    failure(StatusCode::NOT_FOUND, "product not found")
}

pub fn product_not_unique(err: &StorageError) -> Reply {
    tracing::warn!(error = %err, "product violates a uniqueness constraint");
    failure(StatusCode::BAD_REQUEST, "product not unique")
}

pub fn internal_error(op: &str, err: &StorageError) -> Reply {
    tracing::error!(error = %err, "{} failed", op);
    failure(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
}
