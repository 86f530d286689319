use super::Record;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Product fields accepted on create and update, already trimmed and coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Record for Product {
    type Draft = ProductDraft;

    const RESOURCE: &'static str = "product";

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
        }
    }

    fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
    }
}

/// Search filters for `/api/search`. Both filters are AND-composed.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Lowercased name fragment.
    name: Option<String>,
    /// Inclusive upper bound on price.
    max_price: Option<f64>,
}

impl ProductFilter {
    /// Builds a filter from raw query values. Empty values mean "no filter".
    ///
    /// A `max_price` that is not a finite number (`cheap`, `inf`, `NaN`) matches nothing.
    pub fn from_query(name: Option<&str>, max_price: Option<&str>) -> Self {
        let name = name
            .filter(|n| !n.is_empty())
            .map(|n| n.to_lowercase());
        let max_price = max_price.filter(|m| !m.is_empty()).map(|m| {
            m.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .unwrap_or(f64::NAN)
        });
        Self { name, max_price }
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(fragment) = &self.name {
            if !product.name.to_lowercase().contains(fragment.as_str()) {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            // NaN bound: every comparison is false
            if !(product.price <= max) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}
