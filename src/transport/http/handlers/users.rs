use crate::domain::model::{UserDraft, UserFilter};
use crate::transport::http::envelope;
use crate::transport::http::errors::ApiError;
use crate::transport::http::handlers::common::{id_segment, non_empty, parse_id};
use crate::transport::http::types::{ApiResponse, AppState, UserBody, UserSearchParams};
use crate::transport::http::validation::{
    email_like, not_blank, optional_text, required_text, Rule, ValidatedBody, ValidatedJson,
};
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Response;
use serde_json::Value as JsonValue;

pub const USER_RULES: &[Rule] = &[
    Rule::new("name", not_blank, "name is required"),
    Rule::new("email", not_blank, "email is required"),
    Rule::new("email", email_like, "email must be a valid address"),
];

impl ValidatedBody for UserDraft {
    const RULES: &'static [Rule] = USER_RULES;
    const ALIASES: &'static [(&'static str, &'static str)] = &[("nama", "name")];

    fn from_valid(body: &JsonValue) -> Result<Self, ApiError> {
        Ok(UserDraft {
            name: required_text(body, "name")?,
            email: required_text(body, "email")?,
            status: optional_text(body, "status"),
            role: optional_text(body, "role"),
        })
    }
}

const NOT_FOUND: &str = "user not found";

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = ApiResponse)
    )
)]
pub async fn list_users_handler(State(state): State<AppState>) -> Response {
    envelope::ok("user list", state.users.list().await)
}

#[utoipa::path(
    get,
    path = "/api/users/search",
    params(UserSearchParams),
    responses(
        (status = 200, description = "Users whose name contains the fragment", body = ApiResponse)
    )
)]
pub async fn search_users_handler(
    State(state): State<AppState>,
    params: Result<Query<UserSearchParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::Unhandled(e.body_text()))?;
    let found = UserFilter::from_query(non_empty(&params.name))
        .apply(state.users.list().await);
    Ok(envelope::ok("search results", found))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = ApiResponse),
        (status = 404, description = "No user with that id", body = ApiResponse)
    )
)]
pub async fn get_user_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = id_segment(path)
        .as_deref()
        .and_then(parse_id)
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))?;
    let user = state.users.get_by_id(id).await?;
    Ok(envelope::ok("user found", user))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserBody,
    responses(
        (status = 201, description = "User added", body = ApiResponse),
        (status = 400, description = "Validation failed or malformed body", body = ApiResponse)
    )
)]
pub async fn create_user_handler(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<UserDraft>,
) -> Response {
    let user = state.users.insert(draft).await;
    tracing::info!(id = user.id, "user added");
    envelope::created("user added", user)
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    request_body = UserBody,
    responses(
        (status = 200, description = "User updated", body = ApiResponse),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 404, description = "No user with that id", body = ApiResponse)
    )
)]
pub async fn update_user_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    ValidatedJson(draft): ValidatedJson<UserDraft>,
) -> Response {
    let Some(id) = id_segment(path).as_deref().and_then(parse_id) else {
        return envelope::not_found(NOT_FOUND);
    };
    match state.users.update(id, draft).await {
        Ok(user) => envelope::ok("user updated", user),
        Err(_) => envelope::not_found(NOT_FOUND),
    }
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User deleted; data is the removed user", body = ApiResponse),
        (status = 404, description = "No user with that id", body = ApiResponse)
    )
)]
pub async fn delete_user_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let Some(id) = id_segment(path).as_deref().and_then(parse_id) else {
        return envelope::not_found(NOT_FOUND);
    };
    match state.users.delete(id).await {
        Ok(user) => envelope::ok("user deleted", user),
        Err(_) => envelope::not_found(NOT_FOUND),
    }
}
