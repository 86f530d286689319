//! API-key gate, run before route resolution.

use crate::transport::http::errors::ApiError;
use crate::transport::http::types::AppState;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects requests without the shared secret: 401 when the header is missing or
/// empty, 403 when it does not match. Matching requests pass through unchanged.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let rejection = match req.headers().get(API_KEY_HEADER) {
        None => Some(ApiError::AuthMissing),
        Some(value) if value.is_empty() => Some(ApiError::AuthMissing),
        Some(value) if value.as_bytes() != state.config.api_key.as_bytes() => {
            Some(ApiError::AuthInvalid)
        }
        Some(_) => None,
    };

    if let Some(err) = rejection {
        tracing::warn!(path = %req.uri().path(), "rejected request: {err}");
        return Err(err);
    }
    Ok(next.run(req).await)
}
