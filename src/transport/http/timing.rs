use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;

/// Arrival instant of the current request.
#[derive(Debug, Clone, Copy)]
pub struct RequestStart(pub Instant);

impl RequestStart {
    pub fn elapsed_ms(&self) -> u128 {
        self.0.elapsed().as_millis()
    }
}

/// Stamps every request with its arrival time before the gate runs.
pub async fn stamp_request(mut req: Request, next: Next) -> Response {
    tracing::info!(method = %req.method(), path = %req.uri().path(), "request received");
    req.extensions_mut().insert(RequestStart(Instant::now()));
    next.run(req).await
}
