use crate::{
    assistant::{
        GenerateRequest, extract_json_object,
        prompts::{self, FALLBACK_REPLY, WELCOME},
    },
    dto::assistant::{
        ChatReply, LookupRequest, LookupResponse, SendMessageRequest, Transcript, WriteRequest,
        WriteResponse,
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Message, MessageRole},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn transcript(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<Transcript>> {
    let mut data = state.store.write().await;
    data.touch(user.user_id);
    let messages = data
        .transcripts
        .entry(user.user_id)
        .or_insert_with(welcome_transcript)
        .clone();
    let meta = Meta::total(messages.len());
    Ok(ApiResponse::success("Transcript", Transcript { messages }, Some(meta)))
}

/// Appends the question, asks the model with the catalog as context, then appends the reply.
/// A failed call leaves the question in the transcript.
pub async fn send_message(
    state: &AppState,
    user: &AuthUser,
    payload: SendMessageRequest,
) -> AppResult<ApiResponse<ChatReply>> {
    let content = payload.content.trim();
    if content.is_empty() {
        return Err(AppError::BadRequest("message must not be empty".into()));
    }
    // Nothing is recorded while the assistant is off.
    ensure_enabled(state)?;

    let question = Message::user(content);
    let prompt = {
        let mut data = state.store.write().await;
        data.touch(user.user_id);
        data.transcripts
            .entry(user.user_id)
            .or_insert_with(welcome_transcript)
            .push(question.clone());
        prompts::shopping_advice(content, &data.products)
    };

    let generated = state
        .assistant
        .generate(GenerateRequest {
            prompt,
            system_instruction: None,
            web_search: true,
        })
        .await?;

    let reply = Message::model(
        generated
            .text
            .unwrap_or_else(|| FALLBACK_REPLY.to_string()),
        generated.sources,
    );

    let mut data = state.store.write().await;
    data.transcripts
        .entry(user.user_id)
        .or_insert_with(welcome_transcript)
        .push(reply.clone());
    tracing::debug!(user_id = %user.user_id, sources = reply.sources.len(), "assistant replied");

    Ok(ApiResponse::success(
        "OK",
        ChatReply { question, reply },
        None,
    ))
}

pub async fn reset(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<Transcript>> {
    let messages = welcome_transcript();
    let mut data = state.store.write().await;
    data.touch(user.user_id);
    data.transcripts.insert(user.user_id, messages.clone());
    Ok(ApiResponse::success(
        "Transcript reset",
        Transcript { messages },
        Some(Meta::empty()),
    ))
}

/// Asks the model for a live market record of a product and pulls the JSON object out of its reply.
pub async fn lookup_product(
    state: &AppState,
    payload: LookupRequest,
) -> AppResult<ApiResponse<LookupResponse>> {
    let query = payload.query.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest("query must not be empty".into()));
    }
    ensure_enabled(state)?;

    let generated = state
        .assistant
        .generate(GenerateRequest {
            prompt: prompts::product_lookup(query),
            system_instruction: None,
            web_search: true,
        })
        .await?;

    let product = generated.text.as_deref().and_then(extract_json_object);
    if product.is_none() {
        tracing::warn!(query, "lookup reply had no JSON object");
    }

    Ok(ApiResponse::success(
        "Lookup",
        LookupResponse {
            product,
            sources: generated.sources,
        },
        None,
    ))
}

pub async fn write_text(
    state: &AppState,
    payload: WriteRequest,
) -> AppResult<ApiResponse<WriteResponse>> {
    if payload.prompt.trim().is_empty() {
        return Err(AppError::BadRequest("prompt must not be empty".into()));
    }
    ensure_enabled(state)?;

    let generated = state
        .assistant
        .generate(GenerateRequest {
            prompt: payload.prompt,
            system_instruction: Some(payload.lang.instruction().to_string()),
            web_search: false,
        })
        .await?;

    Ok(ApiResponse::success(
        "Generated",
        WriteResponse {
            text: generated.text.unwrap_or_default(),
        },
        None,
    ))
}

pub fn count_sent(messages: &[Message]) -> usize {
    messages
        .iter()
        .filter(|m| m.role == MessageRole::User)
        .count()
}

fn ensure_enabled(state: &AppState) -> AppResult<()> {
    if state.assistant.is_enabled() {
        Ok(())
    } else {
        Err(AppError::ServiceUnavailable)
    }
}

fn welcome_transcript() -> Vec<Message> {
    vec![Message::model(WELCOME, Vec::new())]
}
