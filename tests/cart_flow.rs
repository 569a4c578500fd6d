mod common;

use amirlux_api::{
    dto::{
        cart::{AddToCartRequest, UpdateQuantityRequest},
        products::CreateProductRequest,
    },
    error::AppError,
    models::Category,
    services::{admin_service, auth_service, cart_service},
};

fn add(product_id: &str, quantity: Option<i64>) -> AddToCartRequest {
    AddToCartRequest {
        product_id: product_id.to_string(),
        quantity,
    }
}

fn bump(delta: i64) -> UpdateQuantityRequest {
    UpdateQuantityRequest { delta }
}

#[tokio::test]
async fn adding_twice_bumps_quantity() -> anyhow::Result<()> {
    let state = common::test_state();
    let user = common::customer(&state).await;

    cart_service::add_to_cart(&state, &user, add("lux-4", None)).await?;
    let item = cart_service::add_to_cart(&state, &user, add("lux-4", None))
        .await?
        .data
        .expect("item");
    assert_eq!(item.quantity, 2);

    let cart = cart_service::list_cart(&state, &user).await?.data.expect("cart");
    assert_eq!(cart.count, 1);
    assert_eq!(cart.total, 2 * 850_000);
    Ok(())
}

#[tokio::test]
async fn total_sums_price_times_quantity() -> anyhow::Result<()> {
    let state = common::test_state();
    let user = common::customer(&state).await;

    cart_service::add_to_cart(&state, &user, add("lux-0", Some(1))).await?;
    cart_service::add_to_cart(&state, &user, add("lux-8", Some(3))).await?;

    let cart = cart_service::list_cart(&state, &user).await?.data.expect("cart");
    assert_eq!(cart.count, 2);
    assert_eq!(cart.total, 12_450_000 + 3 * 120_000);
    assert_eq!(cart.items[0].product.id, "lux-0");
    Ok(())
}

#[tokio::test]
async fn decrement_to_zero_removes_line() -> anyhow::Result<()> {
    let state = common::test_state();
    let user = common::customer(&state).await;
    cart_service::add_to_cart(&state, &user, add("lux-5", Some(2))).await?;

    let cart = cart_service::update_quantity(
        &state,
        &user,
        "lux-5",
        UpdateQuantityRequest { delta: -1 },
    )
    .await?
    .data
    .expect("cart");
    assert_eq!(cart.items[0].quantity, 1);

    let cart = cart_service::update_quantity(
        &state,
        &user,
        "lux-5",
        UpdateQuantityRequest { delta: -5 },
    )
    .await?
    .data
    .expect("cart");
    assert!(cart.items.is_empty());
    assert_eq!(cart.total, 0);
    Ok(())
}

#[tokio::test]
async fn rejects_bad_adds() {
    let state = common::test_state();
    let user = common::customer(&state).await;

    let err = cart_service::add_to_cart(&state, &user, add("lux-1", Some(0)))
        .await
        .err()
        .expect("zero quantity");
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = cart_service::add_to_cart(&state, &user, add("nope", None))
        .await
        .err()
        .expect("unknown product");
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[tokio::test]
async fn remove_and_clear() -> anyhow::Result<()> {
    let state = common::test_state();
    let user = common::customer(&state).await;
    cart_service::add_to_cart(&state, &user, add("lux-1", None)).await?;
    cart_service::add_to_cart(&state, &user, add("lux-2", None)).await?;

    let cart = cart_service::remove_from_cart(&state, &user, "lux-1")
        .await?
        .data
        .expect("cart");
    assert_eq!(cart.count, 1);

    let err = cart_service::remove_from_cart(&state, &user, "lux-1")
        .await
        .err()
        .expect("already removed");
    assert!(matches!(err, AppError::NotFound));

    cart_service::clear_cart(&state, &user).await?;
    let cart = cart_service::list_cart(&state, &user).await?.data.expect("cart");
    assert!(cart.items.is_empty());
    Ok(())
}

#[tokio::test]
async fn carts_are_per_owner() -> anyhow::Result<()> {
    let state = common::test_state();
    let user = common::customer(&state).await;
    let guest_token = auth_service::guest_session(&state)
        .await?
        .data
        .expect("guest")
        .token;
    let guest =
        amirlux_api::middleware::auth::decode_token(&guest_token, common::SECRET)?;

    cart_service::add_to_cart(&state, &guest, add("lux-6", None)).await?;

    let guest_cart = cart_service::list_cart(&state, &guest).await?.data.expect("cart");
    let user_cart = cart_service::list_cart(&state, &user).await?.data.expect("cart");
    assert_eq!(guest_cart.count, 1);
    assert_eq!(user_cart.count, 0);
    Ok(())
}

#[tokio::test]
async fn changing_quantity_of_missing_line_is_not_found() -> anyhow::Result<()> {
    let state = common::test_state();
    let user = common::customer(&state).await;

    let err = cart_service::update_quantity(&state, &user, "lux-4", bump(1))
        .await
        .err()
        .expect("empty cart");
    assert!(matches!(err, AppError::NotFound));

    cart_service::add_to_cart(&state, &user, add("lux-4", None)).await?;
    let err = cart_service::update_quantity(&state, &user, "lux-5", bump(1))
        .await
        .err()
        .expect("product not in cart");
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn huge_delta_saturates_quantity() -> anyhow::Result<()> {
    let state = common::test_state();
    let user = common::customer(&state).await;
    cart_service::add_to_cart(&state, &user, add("lux-4", None)).await?;

    let cart = cart_service::update_quantity(
        &state,
        &user,
        "lux-4",
        bump(i64::MAX),
    )
    .await?
    .data
    .expect("cart");
    assert_eq!(cart.items[0].quantity, u32::MAX);
    assert_eq!(cart.total, 850_000 * i64::from(u32::MAX));

    let cart = cart_service::update_quantity(
        &state,
        &user,
        "lux-4",
        bump(i64::MIN),
    )
    .await?
    .data
    .expect("cart");
    assert!(cart.items.is_empty());
    Ok(())
}

#[tokio::test]
async fn oversized_totals_saturate() -> anyhow::Result<()> {
    let state = common::test_state();
    let admin = common::admin(&state).await;
    let user = common::customer(&state).await;

    let product = admin_service::create_product(
        &state,
        &admin,
        CreateProductRequest {
            title: "تاج الماس".into(),
            price: Some(10_000_000_000_000),
            image: None,
            category: Category::Gift,
            description: None,
            weight: None,
            wages_percent: None,
            profit_percent: None,
        },
    )
    .await?
    .data
    .expect("product");

    cart_service::add_to_cart(&state, &user, add(&product.id, Some(1_000_000))).await?;
    cart_service::add_to_cart(&state, &user, add("lux-4", None)).await?;

    let cart = cart_service::list_cart(&state, &user).await?.data.expect("cart");
    assert_eq!(cart.items[0].line_total(), i64::MAX);
    assert_eq!(cart.total, i64::MAX);

    let cart = cart_service::remove_from_cart(&state, &user, "lux-4")
        .await?
        .data
        .expect("cart");
    assert_eq!(cart.total, i64::MAX);
    Ok(())
}

#[tokio::test]
async fn idle_guest_carts_are_evicted() -> anyhow::Result<()> {
    let state = common::test_state();
    let user = common::customer(&state).await;
    let guest_token = auth_service::guest_session(&state)
        .await?
        .data
        .expect("guest")
        .token;
    let guest =
        amirlux_api::middleware::auth::decode_token(&guest_token, common::SECRET)?;
    cart_service::add_to_cart(&state, &guest, add("lux-6", None)).await?;
    cart_service::add_to_cart(&state, &user, add("lux-6", None)).await?;

    // Nobody is idle yet.
    let cutoff = chrono::Utc::now() - chrono::TimeDelta::hours(24);
    assert_eq!(state.store.write().await.evict_idle_guests(cutoff), 0);

    let cutoff = chrono::Utc::now() + chrono::TimeDelta::seconds(1);
    assert_eq!(state.store.write().await.evict_idle_guests(cutoff), 1);

    let guest_cart = cart_service::list_cart(&state, &guest).await?.data.expect("cart");
    let user_cart = cart_service::list_cart(&state, &user).await?.data.expect("cart");
    assert_eq!(guest_cart.count, 0);
    assert_eq!(user_cart.count, 1);
    Ok(())
}
