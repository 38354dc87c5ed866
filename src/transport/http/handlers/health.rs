use crate::transport::http::handlers::common::{failure, reply};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (storage reachable)", body = ApiResponse),
        (status = 503, description = "Service is unhealthy (storage unreachable)", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.products.ping().await {
        Ok(()) => reply(StatusCode::OK, "ok", None, false),
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            failure(StatusCode::SERVICE_UNAVAILABLE, "storage unreachable")
        }
    }
}
