use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    assistant::prompts::WriterLanguage,
    models::{GroundingSource, Message},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatReply {
    pub question: Message,
    pub reply: Message,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Transcript {
    pub messages: Vec<Message>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LookupRequest {
    pub query: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LookupResponse {
    /// The JSON object found in the model's reply, if any.
    #[schema(value_type = Option<Object>)]
    pub product: Option<serde_json::Value>,
    pub sources: Vec<GroundingSource>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct WriteRequest {
    pub prompt: String,
    #[serde(default)]
    pub lang: WriterLanguage,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WriteResponse {
    pub text: String,
}
