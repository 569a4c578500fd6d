mod common;

use amirlux_api::{
    dto::auth::LoginRequest,
    error::AppError,
    middleware::auth::{decode_token, ensure_admin, ensure_signed_in},
    models::Role,
    services::{auth_service, user_service},
};

#[tokio::test]
async fn admin_email_gets_admin_role() -> anyhow::Result<()> {
    let state = common::test_state();
    let resp = auth_service::login_user(
        &state,
        LoginRequest {
            name: None,
            email: "admin@amirlux.ir".into(),
            password: None,
        },
    )
    .await?
    .data
    .expect("login");

    assert_eq!(resp.user.role, Role::Admin);
    assert_eq!(resp.user.name, auth_service::DEFAULT_ADMIN_NAME);
    let user = decode_token(&resp.token, common::SECRET)?;
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.user_id, resp.user.id);
    Ok(())
}

#[tokio::test]
async fn other_emails_are_users_with_default_name() -> anyhow::Result<()> {
    let state = common::test_state();
    let resp = auth_service::login_user(
        &state,
        LoginRequest {
            name: Some("  ".into()),
            email: "someone@example.com".into(),
            password: Some("anything".into()),
        },
    )
    .await?
    .data
    .expect("login");

    assert_eq!(resp.user.role, Role::User);
    assert_eq!(resp.user.name, auth_service::DEFAULT_USER_NAME);
    Ok(())
}

#[tokio::test]
async fn same_email_reuses_user() -> anyhow::Result<()> {
    let state = common::test_state();
    let first = common::sign_in(&state, "sara@example.com").await;
    let second = common::sign_in(&state, "SARA@example.com").await;
    assert_eq!(first.user_id, second.user_id);
    Ok(())
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let state = common::test_state();
    let err = auth_service::login_user(
        &state,
        LoginRequest {
            name: None,
            email: "not-an-email".into(),
            password: None,
        },
    )
    .await
    .err()
    .expect("error");
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[tokio::test]
async fn tokens_from_another_secret_are_rejected() -> anyhow::Result<()> {
    let token = auth_service::issue_token("other", uuid::Uuid::new_v4(), Role::Admin)?;
    let err = decode_token(&token, common::SECRET).err().expect("error");
    assert!(matches!(err, AppError::Unauthorized(_)));
    Ok(())
}

#[tokio::test]
async fn guards_check_roles() -> anyhow::Result<()> {
    let state = common::test_state();
    let admin = common::admin(&state).await;
    let user = common::customer(&state).await;
    let guest_token = auth_service::guest_session(&state)
        .await?
        .data
        .expect("guest")
        .token;
    let guest = decode_token(&guest_token, common::SECRET)?;

    assert!(ensure_admin(&admin).is_ok());
    assert!(matches!(ensure_admin(&user), Err(AppError::Forbidden)));
    assert!(ensure_signed_in(&user).is_ok());
    assert!(matches!(ensure_signed_in(&guest), Err(AppError::Unauthorized(_))));
    Ok(())
}

#[tokio::test]
async fn profile_reports_panel_stats() -> anyhow::Result<()> {
    let state = common::test_state();
    let user = common::customer(&state).await;
    amirlux_api::services::cart_service::add_to_cart(
        &state,
        &user,
        amirlux_api::dto::cart::AddToCartRequest {
            product_id: "lux-0".into(),
            quantity: None,
        },
    )
    .await?;

    let profile = user_service::me(&state, &user).await?.data.expect("profile");
    assert_eq!(profile.user.email, "sara@example.com");
    assert_eq!(profile.stats.orders, 0);
    assert_eq!(profile.stats.cart_items, 1);
    assert_eq!(profile.stats.messages_sent, 0);
    Ok(())
}
