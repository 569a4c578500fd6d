use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Category, Product, Specification};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub title: String,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub description: Option<String>,
    /// Grams; required for gold items.
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub wages_percent: Option<f64>,
    #[serde(default)]
    pub profit_percent: Option<f64>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub price: Option<i64>,
    pub image: Option<String>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub specs: Option<Vec<Specification>>,
    pub weight: Option<f64>,
    pub wages_percent: Option<f64>,
    pub profit_percent: Option<f64>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct CategorySummary {
    /// `all` or a category key.
    pub key: String,
    pub label: String,
    pub count: usize,
}
