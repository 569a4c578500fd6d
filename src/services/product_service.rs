use std::cmp::Ordering;

use crate::{
    dto::products::{CategorySummary, ProductList},
    error::{AppError, AppResult},
    models::{Category, Product},
    response::{ApiResponse, Meta},
    routes::params::{ProductQuery, ProductSortBy, SortOrder},
    state::AppState,
};

pub const ALL_CATEGORIES_KEY: &str = "all";
pub const ALL_CATEGORIES_LABEL: &str = "همه";

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let category = parse_category_filter(query.category.as_deref())?;

    let data = state.store.read().await;
    let mut matches = filter_products(&data.products, &query, category);
    drop(data);

    if let Some(sort_by) = query.sort_by {
        let order = query.sort_order.unwrap_or(SortOrder::Asc);
        sort_products(&mut matches, sort_by, order);
    }

    let total = matches.len() as i64;
    let items = matches
        .into_iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(usize::try_from(limit).unwrap_or(usize::MAX))
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(meta),
    ))
}

pub async fn get_product(state: &AppState, id: &str) -> AppResult<ApiResponse<Product>> {
    let data = state.store.read().await;
    let product = data.product(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", product, None))
}

/// The synthetic `all` entry followed by every category with its product count.
pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<Vec<CategorySummary>>> {
    let data = state.store.read().await;
    let mut summaries = vec![CategorySummary {
        key: ALL_CATEGORIES_KEY.to_string(),
        label: ALL_CATEGORIES_LABEL.to_string(),
        count: data.products.len(),
    }];
    summaries.extend(Category::ALL.into_iter().map(|category| CategorySummary {
        key: category.key().to_string(),
        label: category.label().to_string(),
        count: data
            .products
            .iter()
            .filter(|p| p.category == category)
            .count(),
    }));
    let meta = Meta::total(summaries.len());
    Ok(ApiResponse::success("Categories", summaries, Some(meta)))
}

/// `None` means no category filter.
pub fn parse_category_filter(value: Option<&str>) -> AppResult<Option<Category>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) if v.eq_ignore_ascii_case(ALL_CATEGORIES_KEY) || v == ALL_CATEGORIES_LABEL => {
            Ok(None)
        }
        Some(v) => Category::parse(v)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("unknown category {v}"))),
    }
}

pub fn filter_products(
    products: &[Product],
    query: &ProductQuery,
    category: Option<Category>,
) -> Vec<Product> {
    let needle = query
        .q
        .as_deref()
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    products
        .iter()
        .filter(|p| {
            needle
                .as_deref()
                .is_none_or(|n| p.title.to_lowercase().contains(n))
        })
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| query.min_price.is_none_or(|min| p.price >= min))
        .filter(|p| query.max_price.is_none_or(|max| p.price <= max))
        .cloned()
        .collect()
}

fn sort_products(products: &mut [Product], sort_by: ProductSortBy, order: SortOrder) {
    products.sort_by(|a, b| {
        let ord = match sort_by {
            ProductSortBy::Price => a.price.cmp(&b.price),
            ProductSortBy::Title => a.title.cmp(&b.title),
            ProductSortBy::Rating => a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal),
        };
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}
