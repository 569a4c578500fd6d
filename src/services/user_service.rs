use crate::{
    dto::users::{PanelStats, Profile},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_signed_in},
    response::ApiResponse,
    services::assistant_service::count_sent,
    state::AppState,
};

pub async fn me(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<Profile>> {
    ensure_signed_in(user)?;
    let data = state.store.read().await;
    let record = data
        .users
        .get(&user.user_id)
        .cloned()
        .ok_or(AppError::NotFound)?;

    let stats = PanelStats {
        orders: 0,
        cart_items: data.carts.get(&user.user_id).map_or(0, Vec::len),
        messages_sent: data
            .transcripts
            .get(&user.user_id)
            .map_or(0, |t| count_sent(t)),
    };

    Ok(ApiResponse::success(
        "Profile",
        Profile {
            user: record,
            stats,
        },
        None,
    ))
}
