// src/bin/api_server.rs

use products_api::infra::telemetry;
use products_api::transport;
use products_api::{AppConfig, DatabaseService};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();
    let config = AppConfig::from_env()?;

    // --- Database Initialization ---
    tracing::info!(max_connections = config.max_connections, "connecting to database");
    let db_service = DatabaseService::new(&config).await?;
    tracing::info!("products table ready");

    let app_state = transport::http::AppState::new(db_service.product_storage());

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "API server listening");
    tracing::info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
            tracing::info!("shutdown signal received");
        })
        .await?;

    db_service.close().await;
    tracing::info!("graceful shutdown complete");
    Ok(())
}
