use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::assistant::{
        ChatReply, LookupRequest, LookupResponse, SendMessageRequest, Transcript, WriteRequest,
        WriteResponse,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::assistant_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/messages",
            get(transcript).post(send_message).delete(reset),
        )
        .route("/lookup", post(lookup_product))
        .route("/write", post(write_text))
}

#[utoipa::path(
    get,
    path = "/api/assistant/messages",
    responses(
        (status = 200, description = "Chat transcript, starting with the welcome message", body = ApiResponse<Transcript>)
    ),
    security(("bearer_auth" = [])),
    tag = "Assistant"
)]
pub async fn transcript(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<Transcript>>> {
    let resp = assistant_service::transcript(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/assistant/messages",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Question and model reply", body = ApiResponse<ChatReply>),
        (status = 400, description = "Empty message"),
        (status = 502, description = "Model call failed"),
        (status = 503, description = "Assistant not configured"),
    ),
    security(("bearer_auth" = [])),
    tag = "Assistant"
)]
pub async fn send_message(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SendMessageRequest>,
) -> AppResult<Json<ApiResponse<ChatReply>>> {
    let resp = assistant_service::send_message(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/assistant/messages",
    responses(
        (status = 200, description = "Transcript reset to the welcome message", body = ApiResponse<Transcript>)
    ),
    security(("bearer_auth" = [])),
    tag = "Assistant"
)]
pub async fn reset(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<Transcript>>> {
    let resp = assistant_service::reset(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/assistant/lookup",
    request_body = LookupRequest,
    responses(
        (status = 200, description = "Live product record from the web", body = ApiResponse<LookupResponse>),
        (status = 400, description = "Empty query"),
        (status = 502, description = "Model call failed"),
        (status = 503, description = "Assistant not configured"),
    ),
    security(("bearer_auth" = [])),
    tag = "Assistant"
)]
pub async fn lookup_product(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<LookupRequest>,
) -> AppResult<Json<ApiResponse<LookupResponse>>> {
    let resp = assistant_service::lookup_product(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/assistant/write",
    request_body = WriteRequest,
    responses(
        (status = 200, description = "Creative text in English or Persian", body = ApiResponse<WriteResponse>),
        (status = 400, description = "Empty prompt"),
        (status = 502, description = "Model call failed"),
        (status = 503, description = "Assistant not configured"),
    ),
    security(("bearer_auth" = [])),
    tag = "Assistant"
)]
pub async fn write_text(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<WriteRequest>,
) -> AppResult<Json<ApiResponse<WriteResponse>>> {
    let resp = assistant_service::write_text(&state, payload).await?;
    Ok(Json(resp))
}
