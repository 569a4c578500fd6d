use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::users::Profile, error::AppResult, middleware::auth::AuthUser, response::ApiResponse,
    services::user_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Current user and panel stats", body = ApiResponse<Profile>),
        (status = 401, description = "Guest or missing token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<Profile>>> {
    let resp = user_service::me(&state, &user).await?;
    Ok(Json(resp))
}
