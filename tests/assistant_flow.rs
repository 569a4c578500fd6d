mod common;

use amirlux_api::{
    assistant::{
        AssistantError, Generated,
        prompts::{FALLBACK_REPLY, WELCOME, WriterLanguage},
    },
    dto::assistant::{LookupRequest, SendMessageRequest, WriteRequest},
    error::AppError,
    models::{GroundingSource, MessageRole},
    services::{assistant_service, user_service},
};
use common::ScriptedAssistant;

fn reply(text: &str) -> Result<Generated, AssistantError> {
    Ok(Generated {
        text: Some(text.to_string()),
        sources: vec![GroundingSource {
            title: Some("بازار".into()),
            uri: "https://example.com/gold".into(),
        }],
    })
}

fn ask(content: &str) -> SendMessageRequest {
    SendMessageRequest {
        content: content.to_string(),
    }
}

#[tokio::test]
async fn transcript_starts_with_welcome() -> anyhow::Result<()> {
    let state = common::test_state();
    let user = common::customer(&state).await;
    let messages = assistant_service::transcript(&state, &user)
        .await?
        .data
        .expect("transcript")
        .messages;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, MessageRole::Model);
    assert_eq!(messages[0].content, WELCOME);
    Ok(())
}

#[tokio::test]
async fn send_appends_question_and_reply() -> anyhow::Result<()> {
    let assistant = ScriptedAssistant::replying(vec![reply("گردنبند قلب پیشنهاد می‌شود.")]);
    let state = common::test_state_with(assistant.clone());
    let user = common::customer(&state).await;

    let chat = assistant_service::send_message(&state, &user, ask("  هدیه برای مادر  "))
        .await?
        .data
        .expect("reply");
    assert_eq!(chat.question.content, "هدیه برای مادر");
    assert_eq!(chat.reply.content, "گردنبند قلب پیشنهاد می‌شود.");
    assert_eq!(chat.reply.sources.len(), 1);

    let messages = assistant_service::transcript(&state, &user)
        .await?
        .data
        .expect("transcript")
        .messages;
    let roles: Vec<_> = messages.iter().map(|m| m.role).collect();
    assert_eq!(roles, [MessageRole::Model, MessageRole::User, MessageRole::Model]);

    let requests = assistant.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].web_search);
    assert!(requests[0].prompt.contains("هدیه برای مادر"));
    assert!(requests[0].prompt.contains("قیمت: 12450000"));

    let profile = user_service::me(&state, &user).await?.data.expect("profile");
    assert_eq!(profile.stats.messages_sent, 1);
    Ok(())
}

#[tokio::test]
async fn empty_model_text_uses_fallback() -> anyhow::Result<()> {
    let assistant = ScriptedAssistant::replying(vec![Ok(Generated::default())]);
    let state = common::test_state_with(assistant);
    let user = common::customer(&state).await;

    let chat = assistant_service::send_message(&state, &user, ask("سلام"))
        .await?
        .data
        .expect("reply");
    assert_eq!(chat.reply.content, FALLBACK_REPLY);
    Ok(())
}

#[tokio::test]
async fn failed_call_keeps_question() -> anyhow::Result<()> {
    let assistant = ScriptedAssistant::replying(vec![Err(AssistantError::ApiResponse {
        status: 500,
        body: "boom".into(),
    })]);
    let state = common::test_state_with(assistant);
    let user = common::customer(&state).await;

    let err = assistant_service::send_message(&state, &user, ask("قیمت طلا؟"))
        .await
        .err()
        .expect("upstream error");
    assert!(matches!(err, AppError::Upstream(_)));
    assert_eq!(err.status(), axum::http::StatusCode::BAD_GATEWAY);

    let messages = assistant_service::transcript(&state, &user)
        .await?
        .data
        .expect("transcript")
        .messages;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].content, "قیمت طلا؟");
    Ok(())
}

#[tokio::test]
async fn disabled_assistant_is_unavailable() -> anyhow::Result<()> {
    let state = common::disabled_state();
    let user = common::customer(&state).await;
    let err = assistant_service::send_message(&state, &user, ask("سلام"))
        .await
        .err()
        .expect("disabled");
    assert!(matches!(err, AppError::ServiceUnavailable));

    let messages = assistant_service::transcript(&state, &user)
        .await?
        .data
        .expect("transcript")
        .messages;
    assert_eq!(messages.len(), 1);
    let profile = user_service::me(&state, &user).await?.data.expect("profile");
    assert_eq!(profile.stats.messages_sent, 0);

    let err = assistant_service::lookup_product(
        &state,
        LookupRequest {
            query: "ساعت".into(),
        },
    )
    .await
    .err()
    .expect("disabled");
    assert!(matches!(err, AppError::ServiceUnavailable));
    Ok(())
}

#[tokio::test]
async fn blank_message_is_rejected_before_calling_model() {
    let assistant = ScriptedAssistant::replying(Vec::new());
    let state = common::test_state_with(assistant.clone());
    let user = common::customer(&state).await;

    let err = assistant_service::send_message(&state, &user, ask("   "))
        .await
        .err()
        .expect("bad request");
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(assistant.requests().is_empty());
}

#[tokio::test]
async fn reset_restores_welcome() -> anyhow::Result<()> {
    let assistant = ScriptedAssistant::replying(vec![reply("باشه")]);
    let state = common::test_state_with(assistant);
    let user = common::customer(&state).await;
    assistant_service::send_message(&state, &user, ask("سلام")).await?;

    let messages = assistant_service::reset(&state, &user)
        .await?
        .data
        .expect("transcript")
        .messages;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, WELCOME);
    Ok(())
}

#[tokio::test]
async fn lookup_extracts_json_object() -> anyhow::Result<()> {
    let assistant = ScriptedAssistant::replying(vec![
        reply("نتیجه:\n{\"title\": \"ساعت مچی\", \"price\": 3500000, \"rating\": 4.5}\nپایان"),
        reply("متاسفانه پیدا نشد"),
    ]);
    let state = common::test_state_with(assistant);

    let found = assistant_service::lookup_product(
        &state,
        LookupRequest {
            query: "ساعت".into(),
        },
    )
    .await?
    .data
    .expect("lookup");
    let product = found.product.expect("json object");
    assert_eq!(product["price"], 3_500_000);
    assert_eq!(found.sources.len(), 1);

    let missing = assistant_service::lookup_product(
        &state,
        LookupRequest {
            query: "ساعت".into(),
        },
    )
    .await?
    .data
    .expect("lookup");
    assert!(missing.product.is_none());
    Ok(())
}

#[tokio::test]
async fn writer_passes_language_instruction() -> anyhow::Result<()> {
    let assistant = ScriptedAssistant::replying(vec![reply("بهار آمد")]);
    let state = common::test_state_with(assistant.clone());

    let text = assistant_service::write_text(
        &state,
        WriteRequest {
            prompt: "شعری درباره بهار".into(),
            lang: WriterLanguage::Fa,
        },
    )
    .await?
    .data
    .expect("text")
    .text;
    assert_eq!(text, "بهار آمد");

    let requests = assistant.requests();
    assert!(!requests[0].web_search);
    assert_eq!(
        requests[0].system_instruction.as_deref(),
        Some(WriterLanguage::Fa.instruction())
    );
    Ok(())
}
