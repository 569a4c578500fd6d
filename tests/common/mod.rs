#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use amirlux_api::{
    assistant::{
        AssistantError, DisabledAssistant, GenerateRequest, Generated, ShoppingAssistant,
    },
    config::AppConfig,
    dto::auth::LoginRequest,
    middleware::auth::{AuthUser, decode_token},
    services::auth_service,
    state::AppState,
};

pub const SECRET: &str = "test-secret";

/// Replays queued results and records every request it receives.
#[derive(Default)]
pub struct ScriptedAssistant {
    replies: Mutex<Vec<Result<Generated, AssistantError>>>,
    pub requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedAssistant {
    pub fn replying(replies: Vec<Result<Generated, AssistantError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().rev().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ShoppingAssistant for ScriptedAssistant {
    async fn generate(&self, request: GenerateRequest) -> Result<Generated, AssistantError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or(Err(AssistantError::Disabled))
    }
}

pub fn test_state() -> AppState {
    test_state_with(ScriptedAssistant::replying(Vec::new()))
}

pub fn test_state_with(assistant: Arc<ScriptedAssistant>) -> AppState {
    AppState::new(AppConfig::for_tests(SECRET), assistant)
}

/// State with no assistant configured.
pub fn disabled_state() -> AppState {
    AppState::new(AppConfig::for_tests(SECRET), Arc::new(DisabledAssistant))
}

pub async fn sign_in(state: &AppState, email: &str) -> AuthUser {
    let resp = auth_service::login_user(
        state,
        LoginRequest {
            name: None,
            email: email.to_string(),
            password: Some("secret".into()),
        },
    )
    .await
    .expect("login");
    let token = resp.data.expect("login data").token;
    decode_token(&token, SECRET).expect("decodable token")
}

pub async fn admin(state: &AppState) -> AuthUser {
    sign_in(state, "admin@amirlux.ir").await
}

pub async fn customer(state: &AppState) -> AuthUser {
    sign_in(state, "sara@example.com").await
}
