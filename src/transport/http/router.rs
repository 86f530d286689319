use crate::transport::http::handlers::{products, root, users};
use crate::transport::http::types::{
    ApiResponse, AppState, ErrorDetails, FieldError, Pagination, ProductBody, UserBody,
};
use crate::transport::http::{errors, gate, timing};
use crate::{Product, User};
use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        root::welcome_handler,
        root::test_async_handler,
        products::list_products_handler,
        products::get_product_handler,
        products::create_product_handler,
        products::search_products_handler,
        products::update_product_handler,
        products::delete_product_handler,
        users::list_users_handler,
        users::search_users_handler,
        users::get_user_handler,
        users::create_user_handler,
        users::update_user_handler,
        users::delete_user_handler
    ),
    components(schemas(
        ApiResponse,
        Pagination,
        FieldError,
        ErrorDetails,
        Product,
        ProductBody,
        User,
        UserBody
    )),
    modifiers(&ApiKeyAddon),
    security(("api_key" = []))
)]
pub struct ApiDoc;

struct ApiKeyAddon;

impl Modify for ApiKeyAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-API-Key"))),
            );
        }
    }
}

/// Builds the API router.
///
/// Layer order, outermost first: central error handler, HTTP trace, request timing,
/// API-key gate, then route resolution (unmatched paths fall through to the
/// route-not-found fallback, which is gated too).
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root::welcome_handler))
        .route("/api/test-async", get(root::test_async_handler))
        .route(
            "/api/products",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route(
            "/api/products/:id",
            get(products::get_product_handler)
                .put(products::update_product_handler)
                .delete(products::delete_product_handler),
        )
        .route("/api/search", get(products::search_products_handler))
        .route(
            "/api/users",
            get(users::list_users_handler).post(users::create_user_handler),
        )
        .route("/api/users/search", get(users::search_users_handler))
        .route(
            "/api/users/:id",
            get(users::get_user_handler)
                .put(users::update_user_handler)
                .delete(users::delete_user_handler),
        )
        .fallback(errors::route_not_found)
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            gate::require_api_key,
        ))
        .layer(middleware::from_fn(timing::stamp_request))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            errors::central_error_handler,
        ))
        .with_state(app_state)
}
