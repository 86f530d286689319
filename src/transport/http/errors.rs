//! Request pipeline failures and the central error handler.
//!
//! Gate and validation failures render their own envelopes. Everything else that a
//! handler raises (lookups that find nothing, unmatched routes, unparseable bodies)
//! is marked on the response and finished by [`central_error_handler`], the outermost
//! layer of the router.

use crate::storage::RepositoryError;
use crate::transport::http::envelope;
use crate::transport::http::types::{AppState, ErrorDetails, FieldError};
use axum::extract::{OriginalUri, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("X-API-Key header required")]
    AuthMissing,

    #[error("invalid key")]
    AuthInvalid,

    #[error("validation failed")]
    ValidationFailed(Vec<FieldError>),

    /// An entity lookup found nothing.
    #[error("{0}")]
    NotFound(String),

    /// No route matched; carries the request path.
    #[error("route {0} not found in the API")]
    RouteNotFound(String),

    #[error("{0}")]
    Unhandled(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::AuthMissing => StatusCode::UNAUTHORIZED,
            ApiError::AuthInvalid => StatusCode::FORBIDDEN,
            ApiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            other => central_status(&other.to_string()),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => ApiError::NotFound(err.to_string()),
        }
    }
}

/// Status rule for centrally handled failures: 404 when the message says
/// "not found", 400 otherwise.
pub fn central_status(message: &str) -> StatusCode {
    if message.contains("not found") {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    }
}

/// Marker left on responses produced from a raised failure.
#[derive(Debug, Clone)]
pub struct RaisedFailure {
    pub message: String,
    /// Debug rendering of the failure, exposed as `stack` in development mode.
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        match self {
            ApiError::ValidationFailed(errors) => {
                envelope::error(message, status, Some(ErrorDetails::Fields(errors)))
            }
            ApiError::AuthMissing | ApiError::AuthInvalid => envelope::error(message, status, None),
            raised => {
                let mut response = envelope::error(message.clone(), status, None);
                response.extensions_mut().insert(RaisedFailure {
                    message,
                    detail: format!("{raised:?}"),
                });
                response
            }
        }
    }
}

/// Router fallback: every unmatched path is a raised failure echoing the path.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::RouteNotFound(uri.to_string())
}

/// Terminal layer. Logs raised failures, attaches `errors.stack` in development mode,
/// and turns bare method-mismatch responses into route-not-found envelopes.
///
/// Only re-renders responses; never fails.
pub async fn central_error_handler(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let mut response = next.run(req).await;

    let failure = match response.extensions_mut().remove::<RaisedFailure>() {
        Some(failure) => failure,
        None if response.status() == StatusCode::METHOD_NOT_ALLOWED => {
            response = ApiError::RouteNotFound(uri.to_string()).into_response();
            match response.extensions_mut().remove::<RaisedFailure>() {
                Some(failure) => failure,
                None => return response,
            }
        }
        None => return response,
    };

    let status = response.status();
    tracing::error!(
        %method,
        path = %uri.path(),
        status = status.as_u16(),
        "ERROR: {}",
        failure.message
    );

    if !state.config.is_development() {
        return response;
    }

    let stack = format!("{}\n    at {} {}", failure.detail, method, uri.path());
    envelope::error(
        failure.message,
        status,
        Some(ErrorDetails::Stack { stack: Some(stack) }),
    )
}
