use crate::domain::model::{ProductDraft, ProductFilter};
use crate::transport::http::envelope;
use crate::transport::http::errors::ApiError;
use crate::transport::http::handlers::common::{
    id_segment, non_empty, parse_id, validated_id,
};
use crate::transport::http::types::{ApiResponse, AppState, ProductBody, ProductSearchParams};
use crate::transport::http::validation::{
    min_chars, not_blank, numeric, positive, required_number, required_text, Rule,
    ValidatedBody, ValidatedJson,
};
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Response;
use serde_json::Value as JsonValue;

/// Rule chain for product create and update.
pub const PRODUCT_RULES: &[Rule] = &[
    Rule::new("name", not_blank, "product name is required"),
    Rule::new("name", min_chars::<3>, "product name must be at least 3 characters"),
    Rule::new("description", not_blank, "description is required"),
    Rule::new("price", numeric, "price must be a number"),
    Rule::new("price", positive, "price must be greater than 0"),
];

impl ValidatedBody for ProductDraft {
    const RULES: &'static [Rule] = PRODUCT_RULES;
    const ALIASES: &'static [(&'static str, &'static str)] = &[
        ("nama", "name"),
        ("deskripsi", "description"),
        ("harga", "price"),
    ];

    fn from_valid(body: &JsonValue) -> Result<Self, ApiError> {
        Ok(ProductDraft {
            name: required_text(body, "name")?,
            description: required_text(body, "description")?,
            price: required_number(body, "price")?,
        })
    }
}

const NOT_FOUND: &str = "product not found";

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products in catalog order", body = ApiResponse)
    )
)]
pub async fn list_products_handler(State(state): State<AppState>) -> Response {
    let products = state.products.list().await;
    envelope::ok("product list", products)
}

/// Lookups raise their failure to the central error handler instead of answering it here.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse),
        (status = 400, description = "Id is not a number", body = ApiResponse),
        (status = 404, description = "No product with that id", body = ApiResponse)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    // An undecodable segment fails the id rule like any other non-number.
    let raw_id = id_segment(path).unwrap_or_default();
    let Some(id) = validated_id(&raw_id)? else {
        return Err(ApiError::NotFound(format!(
            "product with id {raw_id} not found"
        )));
    };
    let product = state.products.get_by_id(id).await?;
    Ok(envelope::ok("product found", product))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductBody,
    responses(
        (status = 201, description = "Product added", body = ApiResponse),
        (status = 400, description = "Validation failed or malformed body", body = ApiResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<ProductDraft>,
) -> Response {
    let product = state.products.insert(draft).await;
    tracing::info!(id = product.id, "product added");
    envelope::created("product added", product)
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(ProductSearchParams),
    responses(
        (status = 200, description = "Matching products, possibly none", body = ApiResponse)
    )
)]
pub async fn search_products_handler(
    State(state): State<AppState>,
    params: Result<Query<ProductSearchParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::Unhandled(e.body_text()))?;
    let filter =
        ProductFilter::from_query(non_empty(&params.name), non_empty(&params.max_price));
    let found = filter.apply(state.products.list().await);
    Ok(envelope::ok("search results", found))
}

/// Mutations answer a missing id themselves with a 404 envelope.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    request_body = ProductBody,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 404, description = "No product with that id", body = ApiResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    ValidatedJson(draft): ValidatedJson<ProductDraft>,
) -> Response {
    let Some(id) = id_segment(path).as_deref().and_then(parse_id) else {
        return envelope::not_found(NOT_FOUND);
    };
    match state.products.update(id, draft).await {
        Ok(product) => envelope::ok("product updated", product),
        Err(_) => envelope::not_found(NOT_FOUND),
    }
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted, data is the removed product",
            body = ApiResponse),
        (status = 404, description = "No product with that id", body = ApiResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let Some(id) = id_segment(path).as_deref().and_then(parse_id) else {
        return envelope::not_found(NOT_FOUND);
    };
    match state.products.delete(id).await {
        Ok(product) => envelope::ok("product deleted", product),
        Err(_) => envelope::not_found(NOT_FOUND),
    }
}
