use crate::transport::http::envelope;
use crate::transport::http::timing::RequestStart;
use crate::transport::http::types::ApiResponse;
use axum::response::Response;
use axum::Extension;
use serde_json::json;
use std::time::Duration;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting with request processing time", body = ApiResponse),
        (status = 401, description = "Missing X-API-Key header", body = ApiResponse),
        (status = 403, description = "Invalid API key", body = ApiResponse)
    )
)]
pub async fn welcome_handler(start: Option<Extension<RequestStart>>) -> Response {
    let elapsed = start.map(|Extension(s)| s.elapsed_ms()).unwrap_or(0);
    envelope::ok(
        "welcome to the e-commerce API",
        json!({
            "message": "welcome to the e-commerce API",
            "day": 4,
            "status": "server running",
            "elapsed": format!("{elapsed} ms"),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/api/test-async",
    responses(
        (status = 200, description = "Delayed success", body = ApiResponse)
    )
)]
pub async fn test_async_handler() -> Response {
    tokio::time::sleep(Duration::from_millis(100)).await;
    envelope::ok_empty("async succeeded")
}
