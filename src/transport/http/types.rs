use crate::domain::model::seed::{seed_products, seed_users};
use crate::domain::model::{Product, User};
use crate::infra::config::AppConfig;
use crate::storage::{InMemoryRepository, Repository};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub products: Arc<dyn Repository<Product>>,
    pub users: Arc<dyn Repository<User>>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        products: Arc<dyn Repository<Product>>,
        users: Arc<dyn Repository<User>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            products,
            users,
        }
    }

    /// State backed by in-memory repositories holding the starter catalog.
    pub fn seeded(config: AppConfig) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryRepository::with_records(seed_products())),
            Arc::new(InMemoryRepository::with_records(seed_users())),
        )
    }
}

/// The envelope every endpoint responds with.
///
/// `data`, `pagination` and `errors` are omitted from the wire when absent, never sent as `null`.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorDetails>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

/// One failing validation rule.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(untagged)]
pub enum ErrorDetails {
    /// Validation failures, in rule declaration order.
    Fields(Vec<FieldError>),
    /// Development-mode detail for centrally handled failures.
    Stack {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stack: Option<String>,
    },
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductSearchParams {
    /// Case-insensitive name fragment.
    pub name: Option<String>,
    /// Inclusive price ceiling.
    pub max_price: Option<String>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserSearchParams {
    pub name: Option<String>,
}

/// Request body for product create/update. `nama`, `deskripsi` and `harga` are accepted as aliases.
#[derive(Debug, ToSchema)]
pub struct ProductBody {
    pub name: String,
    pub description: String,
    #[schema(value_type = f64)]
    pub price: JsonValue,
}

/// Request body for user create/update. `nama` is accepted as an alias for `name`.
#[derive(Debug, ToSchema)]
pub struct UserBody {
    pub name: String,
    pub email: String,
    pub status: Option<String>,
    pub role: Option<String>,
}
