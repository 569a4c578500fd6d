use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::auth::{Claims, GuestResponse, LoginRequest, LoginResponse},
    error::{AppError, AppResult},
    models::{Role, User},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub const DEFAULT_ADMIN_NAME: &str = "مدیر سیستم";
pub const DEFAULT_USER_NAME: &str = "کاربر جدید";
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Stub sign-in: no password check. The role is `admin` only for the configured admin email.
pub async fn login_user(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let LoginRequest { name, email, .. } = payload;
    let email = email.trim().to_string();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest("a valid email is required".into()));
    }

    let role = role_for_email(&email, &state.config.admin_email);
    let name = name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| default_name(role).to_string());

    let mut data = state.store.write().await;
    let user = match data.user_by_email(&email).map(|u| u.id) {
        Some(id) => {
            let user = data.users.get_mut(&id).ok_or(AppError::NotFound)?;
            user.name = name;
            user.role = role;
            user.clone()
        }
        None => {
            let user = User {
                id: Uuid::new_v4(),
                name,
                email,
                role,
                created_at: Utc::now(),
            };
            data.users.insert(user.id, user.clone());
            user
        }
    };

    log_audit(
        &mut data,
        Some(user.id),
        "user_login",
        Some("users"),
        Some(serde_json::json!({ "role": user.role.as_str() })),
    );
    drop(data);

    let token = issue_token(&state.config.jwt_secret, user.id, user.role)?;
    Ok(ApiResponse::success(
        "Logged in",
        LoginResponse { token, user },
        Some(Meta::empty()),
    ))
}

/// Anonymous session that can hold a cart and a chat transcript.
pub async fn guest_session(state: &AppState) -> AppResult<ApiResponse<GuestResponse>> {
    let session_id = Uuid::new_v4();
    let token = issue_token(&state.config.jwt_secret, session_id, Role::Guest)?;
    tracing::debug!(%session_id, "guest session issued");
    Ok(ApiResponse::success(
        "Guest session",
        GuestResponse { token, session_id },
        Some(Meta::empty()),
    ))
}

pub fn role_for_email(email: &str, admin_email: &str) -> Role {
    if email.eq_ignore_ascii_case(admin_email.trim()) {
        Role::Admin
    } else {
        Role::User
    }
}

fn default_name(role: Role) -> &'static str {
    match role {
        Role::Admin => DEFAULT_ADMIN_NAME,
        Role::User | Role::Guest => DEFAULT_USER_NAME,
    }
}

/// HS256 token carrying `sub` and `role`, valid for 24 hours.
pub fn issue_token(secret: &str, subject: Uuid, role: Role) -> AppResult<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(TOKEN_TTL_HOURS))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: subject.to_string(),
        role: role.as_str().to_string(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}
