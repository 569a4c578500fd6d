use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::auth::{GuestResponse, LoginRequest, LoginResponse},
    error::AppResult,
    response::ApiResponse,
    services::auth_service::{guest_session, login_user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/guest", post(guest))
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Create (or reuse) a user and sign in", body = ApiResponse<LoginResponse>),
        (status = 400, description = "Invalid email")
    ),
    tag = "Auth"
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let resp = login_user(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login user", body = ApiResponse<LoginResponse>),
        (status = 400, description = "Invalid email")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let resp = login_user(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/guest",
    responses(
        (status = 200, description = "Anonymous session token", body = ApiResponse<GuestResponse>)
    ),
    tag = "Auth"
)]
pub async fn guest(State(state): State<AppState>) -> AppResult<Json<ApiResponse<GuestResponse>>> {
    let resp = guest_session(&state).await?;
    Ok(Json(resp))
}
