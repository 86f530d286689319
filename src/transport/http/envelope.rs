//! Builders for the uniform `{success, message, data?, pagination?, errors?}` envelope.
//!
//! Callers choose the status code; the shorthands below only cover the defaults
//! (200 for success, 400 for error) and the statuses handlers use repeatedly.

use crate::transport::http::types::{ApiResponse, ErrorDetails, Pagination};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub fn success<T: Serialize>(
    message: impl Into<String>,
    data: Option<T>,
    pagination: Option<Pagination>,
    status: StatusCode,
) -> Response {
    let data = match data.map(serde_json::to_value).transpose() {
        Ok(v) => v.filter(|v| !v.is_null()),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode response data");
            return error(
                "failed to encode response data",
                StatusCode::INTERNAL_SERVER_ERROR,
                None,
            );
        }
    };

    (
        status,
        Json(ApiResponse {
            success: true,
            message: message.into(),
            data,
            pagination,
            errors: None,
        }),
    )
        .into_response()
}

pub fn error(
    message: impl Into<String>,
    status: StatusCode,
    errors: Option<ErrorDetails>,
) -> Response {
    (
        status,
        Json(ApiResponse {
            success: false,
            message: message.into(),
            data: None,
            pagination: None,
            errors,
        }),
    )
        .into_response()
}

/// 200 with data.
pub fn ok<T: Serialize>(message: impl Into<String>, data: T) -> Response {
    success(message, Some(data), None, StatusCode::OK)
}

/// 200 without data.
pub fn ok_empty(message: impl Into<String>) -> Response {
    success::<()>(message, None, None, StatusCode::OK)
}

/// 201 with the created record.
pub fn created<T: Serialize>(message: impl Into<String>, data: T) -> Response {
    success(message, Some(data), None, StatusCode::CREATED)
}

/// 400 without details.
pub fn bad_request(message: impl Into<String>) -> Response {
    error(message, StatusCode::BAD_REQUEST, None)
}

pub fn not_found(message: impl Into<String>) -> Response {
    error(message, StatusCode::NOT_FOUND, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::http::types::FieldError;
    use http_body_util::BodyExt;
    use serde_json::{json, Value as JsonValue};

    async fn body_json(response: Response) -> JsonValue {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn success_omits_absent_fields() {
        let response = ok_empty("async succeeded");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "success": true, "message": "async succeeded" })
        );
    }

    #[tokio::test]
    async fn success_carries_data_and_pagination() {
        let pagination = Pagination {
            page: 1,
            limit: 10,
            total: 2,
        };
        let response = success("page", Some(vec![1, 2]), Some(pagination), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": true,
                "message": "page",
                "data": [1, 2],
                "pagination": { "page": 1, "limit": 10, "total": 2 }
            })
        );
    }

    #[tokio::test]
    async fn created_uses_201() {
        let response = created("added", json!({ "id": 4 }));
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn error_defaults_and_field_list() {
        let response = bad_request("nope");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "success": false, "message": "nope" })
        );

        let response = error(
            "validation failed",
            StatusCode::BAD_REQUEST,
            Some(ErrorDetails::Fields(vec![FieldError::new("name", "name is required")])),
        );
        assert_eq!(
            body_json(response).await,
            json!({
                "success": false,
                "message": "validation failed",
                "errors": [{ "field": "name", "message": "name is required" }]
            })
        );
    }
}
