use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::AuditEntry;

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkGoldUpdateRequest {
    /// Toman per gram of 18k gold.
    pub price_per_gram: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkGoldUpdateResponse {
    pub price_per_gram: i64,
    pub repriced: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GoldQuoteRequest {
    pub price_per_gram: i64,
    pub weight: f64,
    pub wages_percent: Option<f64>,
    pub profit_percent: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct AuditList {
    #[schema(value_type = Vec<AuditEntry>)]
    pub items: Vec<AuditEntry>,
}
