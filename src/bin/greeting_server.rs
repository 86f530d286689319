// src/bin/greeting_server.rs

use anyhow::Context;
use storefront_api::infra::config;
use storefront_api::infra::logging::{self, LogFormat};
use storefront_api::transport::greeting::create_greeting_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init(LogFormat::from_env())?;

    let port = config::greeting_port()?;
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("greeting server running at http://{addr}/");

    axum::serve(listener, create_greeting_router()).await?;
    Ok(())
}
