use std::fmt::Write;

use uuid::Uuid;

use crate::{
    audit::log_audit,
    catalog::{NEW_PRODUCT_RATING, authenticity_specs, gold_specs},
    dto::{
        admin::{AuditList, BulkGoldUpdateRequest, BulkGoldUpdateResponse, GoldQuoteRequest},
        products::{CreateProductRequest, UpdateProductRequest},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Product,
    pricing::{self, GoldQuote},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub const CSV_FILENAME: &str = "AmirLux_Products.csv";
const CSV_HEADER: [&str; 7] = ["ID", "Title", "Category", "Price", "Weight", "Wages%", "Profit%"];

pub async fn create_product(
    state: &AppState,
    user: &AuthUser,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    ensure_admin(user)?;
    let title = payload.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::BadRequest("title is required".into()));
    }
    let price = payload.price.unwrap_or(0);
    if price < 0 {
        return Err(AppError::BadRequest("price must not be negative".into()));
    }

    let mut product = Product {
        id: Uuid::new_v4().to_string(),
        title,
        price,
        image: payload.image.unwrap_or_default(),
        category: payload.category,
        rating: NEW_PRODUCT_RATING,
        description: payload.description.unwrap_or_default(),
        specs: Vec::new(),
        weight: payload.weight,
        wages_percent: payload.wages_percent,
        profit_percent: payload.profit_percent,
    };
    normalize_gold_fields(&mut product, state, true)?;

    let mut data = state.store.write().await;
    data.products.insert(0, product.clone());
    log_audit(
        &mut data,
        Some(user.user_id),
        "product_create",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id })),
    );

    Ok(ApiResponse::success(
        "Product created",
        product,
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    user: &AuthUser,
    id: &str,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    ensure_admin(user)?;

    let mut data = state.store.write().await;
    let existing = data.product(id).cloned().ok_or(AppError::NotFound)?;

    let gold_inputs_changed = payload.category.is_some()
        || payload.weight.is_some()
        || payload.wages_percent.is_some()
        || payload.profit_percent.is_some();
    let specs_given = payload.specs.is_some();

    let mut product = existing;
    if let Some(title) = payload.title {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("title must not be empty".into()));
        }
        product.title = title;
    }
    if let Some(price) = payload.price {
        if price < 0 {
            return Err(AppError::BadRequest("price must not be negative".into()));
        }
        product.price = price;
    }
    if let Some(rating) = payload.rating {
        if !(0.0..=5.0).contains(&rating) {
            return Err(AppError::BadRequest("rating must be between 0 and 5".into()));
        }
        product.rating = rating;
    }
    if let Some(image) = payload.image {
        product.image = image;
    }
    if let Some(description) = payload.description {
        product.description = description;
    }
    if let Some(category) = payload.category {
        product.category = category;
    }
    if let Some(weight) = payload.weight {
        product.weight = Some(weight);
    }
    if let Some(wages) = payload.wages_percent {
        product.wages_percent = Some(wages);
    }
    if let Some(profit) = payload.profit_percent {
        product.profit_percent = Some(profit);
    }
    if let Some(specs) = payload.specs {
        product.specs = specs;
    }
    normalize_gold_fields(&mut product, state, gold_inputs_changed && !specs_given)?;

    let slot = data.product_mut(id).ok_or(AppError::NotFound)?;
    *slot = product.clone();
    log_audit(
        &mut data,
        Some(user.user_id),
        "product_update",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id })),
    );

    Ok(ApiResponse::success(
        "Updated",
        product,
        Some(Meta::empty()),
    ))
}

/// Cart lines keep their snapshot of a deleted product.
pub async fn delete_product(
    state: &AppState,
    user: &AuthUser,
    id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let mut data = state.store.write().await;
    let before = data.products.len();
    data.products.retain(|p| p.id != id);
    if data.products.len() == before {
        return Err(AppError::NotFound);
    }

    log_audit(
        &mut data,
        Some(user.user_id),
        "product_delete",
        Some("products"),
        Some(serde_json::json!({ "product_id": id })),
    );

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn bulk_update_gold(
    state: &AppState,
    user: &AuthUser,
    payload: BulkGoldUpdateRequest,
) -> AppResult<ApiResponse<BulkGoldUpdateResponse>> {
    ensure_admin(user)?;
    let mut data = state.store.write().await;
    let repriced = pricing::reprice_gold(
        &mut data.products,
        payload.price_per_gram,
        state.config.gold,
    )?;

    log_audit(
        &mut data,
        Some(user.user_id),
        "gold_reprice",
        Some("products"),
        Some(serde_json::json!({
            "price_per_gram": payload.price_per_gram,
            "repriced": repriced,
        })),
    );

    Ok(ApiResponse::success(
        "Gold prices updated",
        BulkGoldUpdateResponse {
            price_per_gram: payload.price_per_gram,
            repriced,
        },
        Some(Meta::empty()),
    ))
}

pub async fn quote_gold(
    state: &AppState,
    user: &AuthUser,
    payload: GoldQuoteRequest,
) -> AppResult<ApiResponse<GoldQuote>> {
    ensure_admin(user)?;
    let quote = pricing::quote(
        payload.price_per_gram,
        payload.weight,
        payload
            .wages_percent
            .unwrap_or(state.config.gold.wages_percent),
        payload
            .profit_percent
            .unwrap_or(state.config.gold.profit_percent),
    )?;
    Ok(ApiResponse::success("Gold quote", quote, None))
}

/// UTF-8 CSV with a byte-order mark so spreadsheet apps pick the right encoding.
pub async fn export_csv(state: &AppState, user: &AuthUser) -> AppResult<String> {
    ensure_admin(user)?;
    let data = state.store.read().await;
    let csv = render_csv(&data.products);
    tracing::info!(rows = data.products.len(), "catalog exported");
    Ok(csv)
}

pub async fn audit_log(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<AuditList>> {
    ensure_admin(user)?;
    let data = state.store.read().await;
    let items: Vec<_> = data.audit.iter().rev().cloned().collect();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Audit log", AuditList { items }, Some(meta)))
}

pub fn render_csv(products: &[Product]) -> String {
    let mut csv = String::from("\u{feff}");
    csv.push_str(&CSV_HEADER.join(","));
    for p in products {
        let _ = write!(
            csv,
            "\n{},{},{},{},{},{},{}",
            csv_field(&p.id),
            csv_field(&p.title),
            csv_field(p.category.label()),
            p.price,
            optional_number(p.weight),
            optional_number(p.wages_percent),
            optional_number(p.profit_percent),
        );
    }
    csv
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn optional_number(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Gold items need a weight and get percentages from config defaults; other
/// items drop gold fields. With `regenerate_specs` the spec rows are rebuilt.
fn normalize_gold_fields(
    product: &mut Product,
    state: &AppState,
    regenerate_specs: bool,
) -> AppResult<()> {
    if product.is_gold() {
        let weight = product
            .weight
            .filter(|w| w.is_finite() && *w > 0.0)
            .ok_or_else(|| AppError::BadRequest("gold items need a weight greater than 0".into()))?;
        let wages = product
            .wages_percent
            .unwrap_or(state.config.gold.wages_percent);
        let profit = product
            .profit_percent
            .unwrap_or(state.config.gold.profit_percent);
        for value in [wages, profit] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::BadRequest("percentages must not be negative".into()));
            }
        }
        product.wages_percent = Some(wages);
        product.profit_percent = Some(profit);
        if regenerate_specs {
            product.specs = gold_specs(weight, wages, profit);
        }
    } else {
        product.weight = None;
        product.wages_percent = None;
        product.profit_percent = None;
        if regenerate_specs {
            product.specs = authenticity_specs();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_catalog;

    #[test]
    fn csv_has_bom_header_and_dashes() {
        let products = seed_catalog(5);
        let csv = render_csv(&products);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("\u{feff}ID,Title,Category,Price,Weight,Wages%,Profit%")
        );
        let gold = lines.next().unwrap();
        assert!(gold.starts_with("lux-0,"));
        assert!(gold.ends_with(",12450000,2.4,5,7"));
        let cosmetic = lines.nth(3).unwrap();
        assert!(cosmetic.ends_with(",850000,-,-,-"));
    }

    #[test]
    fn csv_quotes_fields_with_commas() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("plain"), "plain");
    }
}
