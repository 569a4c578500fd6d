//! Gold pricing: `round(rate × grams × (1 + (wages% + profit%) / 100))`.

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    config::GoldDefaults,
    error::{AppError, AppResult},
    models::Product,
};

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq)]
pub struct GoldQuote {
    pub price_per_gram: i64,
    pub weight: f64,
    pub wages_percent: f64,
    pub profit_percent: f64,
    /// Metal value before wages and profit.
    pub base_price: i64,
    pub wages_amount: i64,
    pub profit_amount: i64,
    pub final_price: i64,
}

pub fn gold_price(
    price_per_gram: i64,
    weight: f64,
    wages_percent: f64,
    profit_percent: f64,
) -> AppResult<i64> {
    validate(price_per_gram, weight, wages_percent, profit_percent)?;
    Ok(compute(price_per_gram, weight, wages_percent, profit_percent))
}

pub fn quote(
    price_per_gram: i64,
    weight: f64,
    wages_percent: f64,
    profit_percent: f64,
) -> AppResult<GoldQuote> {
    validate(price_per_gram, weight, wages_percent, profit_percent)?;
    let base = price_per_gram as f64 * weight;
    let final_price = compute(price_per_gram, weight, wages_percent, profit_percent);
    let wages_amount = (base * wages_percent / 100.0).round() as i64;
    // Profit absorbs rounding so the parts always sum to the final price.
    let base_price = base.round() as i64;
    let profit_amount = final_price - base_price - wages_amount;
    Ok(GoldQuote {
        price_per_gram,
        weight,
        wages_percent,
        profit_percent,
        base_price,
        wages_amount,
        profit_amount,
        final_price,
    })
}

/// Reprices every gold item with a positive weight. Returns the number of items repriced.
pub fn reprice_gold(
    products: &mut [Product],
    price_per_gram: i64,
    defaults: GoldDefaults,
) -> AppResult<usize> {
    if price_per_gram <= 0 {
        return Err(AppError::BadRequest(
            "price_per_gram must be greater than 0".into(),
        ));
    }

    let mut repriced = 0;
    for product in products.iter_mut().filter(|p| p.is_gold()) {
        let Some(weight) = product.weight.filter(|w| w.is_finite() && *w > 0.0) else {
            continue;
        };
        let wages = product.wages_percent.unwrap_or(defaults.wages_percent);
        let profit = product.profit_percent.unwrap_or(defaults.profit_percent);
        match gold_price(price_per_gram, weight, wages, profit) {
            Ok(price) => {
                product.price = price;
                repriced += 1;
            }
            Err(err) => {
                tracing::warn!(product_id = %product.id, error = %err, "skipping gold item");
            }
        }
    }
    Ok(repriced)
}

fn compute(price_per_gram: i64, weight: f64, wages_percent: f64, profit_percent: f64) -> i64 {
    let multiplier = 1.0 + (wages_percent + profit_percent) / 100.0;
    (price_per_gram as f64 * weight * multiplier).round() as i64
}

fn validate(
    price_per_gram: i64,
    weight: f64,
    wages_percent: f64,
    profit_percent: f64,
) -> AppResult<()> {
    if price_per_gram <= 0 {
        return Err(AppError::BadRequest(
            "price_per_gram must be greater than 0".into(),
        ));
    }
    if !weight.is_finite() || weight <= 0.0 {
        return Err(AppError::BadRequest("weight must be greater than 0".into()));
    }
    for (name, value) in [("wages_percent", wages_percent), ("profit_percent", profit_percent)] {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::BadRequest(format!("{name} must not be negative")));
        }
    }
    Ok(())
}
