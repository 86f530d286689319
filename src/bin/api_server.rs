// src/bin/api_server.rs

use anyhow::Context;
use storefront_api::infra::logging::{self, LogFormat};
use storefront_api::transport;
use storefront_api::AppConfig;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init(LogFormat::from_env())?;

    // --- Configuration ---
    let config = AppConfig::from_env()?;
    let addr = config.socket_addr();
    tracing::info!(
        port = config.port,
        environment = ?config.environment,
        "configuration loaded"
    );

    // --- State: in-memory repositories seeded with the starter catalog ---
    let app_state = transport::http::AppState::seeded(config);

    // --- API Server Initialization ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("e-commerce API listening on http://{addr}");
    tracing::info!("send the header X-API-Key with every request");
    tracing::info!("Swagger UI available at http://{addr}/swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
