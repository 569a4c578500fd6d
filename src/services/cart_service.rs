use crate::{
    audit::log_audit,
    dto::cart::{AddToCartRequest, CartView, UpdateQuantityRequest},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::CartItem,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_cart(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<CartView>> {
    let data = state.store.read().await;
    let items = data.carts.get(&user.user_id).cloned().unwrap_or_default();
    let view = CartView::from_items(items);
    let meta = Meta::total(view.count);
    Ok(ApiResponse::success("OK", view, Some(meta)))
}

/// Adds `quantity` (default 1) of a product, merging with an existing line.
pub async fn add_to_cart(
    state: &AppState,
    user: &AuthUser,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartItem>> {
    let quantity = payload.quantity.unwrap_or(1);
    if quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }
    let quantity = u32::try_from(quantity)
        .map_err(|_| AppError::BadRequest("quantity is too large".to_string()))?;

    let mut data = state.store.write().await;
    let product = data
        .product(&payload.product_id)
        .cloned()
        .ok_or_else(|| AppError::BadRequest("product not found".to_string()))?;

    data.touch(user.user_id);
    let cart = data.carts.entry(user.user_id).or_default();
    let item = match cart.iter_mut().find(|i| i.product.id == product.id) {
        Some(existing) => {
            existing.quantity = existing.quantity.saturating_add(quantity);
            existing.clone()
        }
        None => {
            let item = CartItem { product, quantity };
            cart.push(item.clone());
            item
        }
    };

    log_audit(
        &mut data,
        Some(user.user_id),
        "cart_add",
        Some("cart"),
        Some(serde_json::json!({ "product_id": item.product.id, "quantity": item.quantity })),
    );

    Ok(ApiResponse::success("OK", item, None))
}

/// Shifts a line's quantity by `delta`, clamping at 0; a line at 0 is removed.
pub async fn update_quantity(
    state: &AppState,
    user: &AuthUser,
    product_id: &str,
    payload: UpdateQuantityRequest,
) -> AppResult<ApiResponse<CartView>> {
    let mut data = state.store.write().await;
    data.touch(user.user_id);
    let cart = data.carts.get_mut(&user.user_id).ok_or(AppError::NotFound)?;
    let item = cart
        .iter_mut()
        .find(|i| i.product.id == product_id)
        .ok_or(AppError::NotFound)?;

    let next = i64::from(item.quantity)
        .saturating_add(payload.delta)
        .clamp(0, i64::from(u32::MAX));
    item.quantity = u32::try_from(next)
        .map_err(|_| AppError::BadRequest("quantity is too large".to_string()))?;
    cart.retain(|i| i.quantity > 0);
    let view = CartView::from_items(cart.clone());

    log_audit(
        &mut data,
        Some(user.user_id),
        "cart_update",
        Some("cart"),
        Some(serde_json::json!({ "product_id": product_id, "delta": payload.delta })),
    );

    let meta = Meta::total(view.count);
    Ok(ApiResponse::success("OK", view, Some(meta)))
}

pub async fn remove_from_cart(
    state: &AppState,
    user: &AuthUser,
    product_id: &str,
) -> AppResult<ApiResponse<CartView>> {
    let mut data = state.store.write().await;
    data.touch(user.user_id);
    let cart = data.carts.get_mut(&user.user_id).ok_or(AppError::NotFound)?;
    let before = cart.len();
    cart.retain(|i| i.product.id != product_id);
    if cart.len() == before {
        return Err(AppError::NotFound);
    }
    let view = CartView::from_items(cart.clone());

    log_audit(
        &mut data,
        Some(user.user_id),
        "cart_remove",
        Some("cart"),
        Some(serde_json::json!({ "product_id": product_id })),
    );

    Ok(ApiResponse::success(
        "Removed from cart",
        view,
        Some(Meta::empty()),
    ))
}

pub async fn clear_cart(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<CartView>> {
    let mut data = state.store.write().await;
    data.touch(user.user_id);
    let removed = data.carts.remove(&user.user_id).map_or(0, |c| c.len());
    log_audit(
        &mut data,
        Some(user.user_id),
        "cart_clear",
        Some("cart"),
        Some(serde_json::json!({ "lines": removed })),
    );
    Ok(ApiResponse::success(
        "Cart cleared",
        CartView::from_items(Vec::new()),
        Some(Meta::empty()),
    ))
}
