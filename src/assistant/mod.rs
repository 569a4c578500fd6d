//! Shopping assistant: a thin pass-through to a hosted generative model.
//!
//! `ShoppingAssistant` is the seam between the services and the provider.
//! `gemini` holds the HTTP client; prompts are built in `prompts`.

pub mod gemini;
pub mod prompts;

use async_trait::async_trait;

use crate::models::GroundingSource;

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// No API key was configured.
    #[error("assistant disabled")]
    Disabled,

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    #[error("API request failed: {0}")]
    ApiRequest(String),

    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    #[error("API response parse failed: {0}")]
    ApiParse(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub system_instruction: Option<String>,
    /// Let the model ground its answer with a web search.
    pub web_search: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generated {
    /// `None` when the model returned no text parts.
    pub text: Option<String>,
    pub sources: Vec<GroundingSource>,
}

#[async_trait]
pub trait ShoppingAssistant: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<Generated, AssistantError>;

    /// `false` when every call would fail with `Disabled`.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Used when no API key is configured.
pub struct DisabledAssistant;

#[async_trait]
impl ShoppingAssistant for DisabledAssistant {
    async fn generate(&self, _request: GenerateRequest) -> Result<Generated, AssistantError> {
        Err(AssistantError::Disabled)
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Returns the span from the first `{` to the last `}` parsed as JSON.
pub fn extract_json_object(text: &str) -> Option<serde_json::Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}
