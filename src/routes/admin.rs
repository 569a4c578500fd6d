use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};

use crate::{
    dto::{
        admin::{AuditList, BulkGoldUpdateRequest, BulkGoldUpdateResponse, GoldQuoteRequest},
        products::{CreateProductRequest, UpdateProductRequest},
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::Product,
    pricing::GoldQuote,
    response::ApiResponse,
    services::admin_service::{self, CSV_FILENAME},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product))
        .route("/products/export", get(export_products))
        .route("/products/{id}", put(update_product).delete(delete_product))
        .route("/gold/reprice", post(bulk_update_gold))
        .route("/gold/quote", post(quote_gold))
        .route("/audit", get(audit_log))
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Create product (prepended to the catalog)", body = ApiResponse<Product>),
        (status = 400, description = "Invalid product"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_product(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = admin_service::create_product(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ApiResponse<Product>),
        (status = 400, description = "Invalid product"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProductRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = admin_service::update_product(&state, &user, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted product"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = admin_service::delete_product(&state, &user, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/gold/reprice",
    request_body = BulkGoldUpdateRequest,
    responses(
        (status = 200, description = "Reprice every gold item from the per-gram rate", body = ApiResponse<BulkGoldUpdateResponse>),
        (status = 400, description = "Invalid rate"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn bulk_update_gold(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<BulkGoldUpdateRequest>,
) -> AppResult<Json<ApiResponse<BulkGoldUpdateResponse>>> {
    let resp = admin_service::bulk_update_gold(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/gold/quote",
    request_body = GoldQuoteRequest,
    responses(
        (status = 200, description = "Price breakdown for one gold item", body = ApiResponse<GoldQuote>),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn quote_gold(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<GoldQuoteRequest>,
) -> AppResult<Json<ApiResponse<GoldQuote>>> {
    let resp = admin_service::quote_gold(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/products/export",
    responses(
        (status = 200, description = "Catalog as CSV", content_type = "text/csv", body = String),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn export_products(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Response> {
    let csv = admin_service::export_csv(&state, &user).await?;
    let disposition = format!("attachment; filename=\"{CSV_FILENAME}\"");
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/audit",
    responses(
        (status = 200, description = "Recorded actions, newest first", body = ApiResponse<AuditList>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn audit_log(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<AuditList>>> {
    let resp = admin_service::audit_log(&state, &user).await?;
    Ok(Json(resp))
}
