/*!
 * Tests for provider request construction and the mock provider
 */

use serde_json::json;
use yawtai::providers::openai::OpenAIRequest;
use yawtai::providers::{ChatMessage, Provider, Role};
use yawtai::translation::prompts::build_translation_messages;

use crate::common::mock_providers::{MockErrorType, MockOpenAI};
use yawtai::errors::ProviderError;

#[test]
fn test_request_builder_shouldKeepMessageOrder() {
    let request = OpenAIRequest::new("gpt-3.5-turbo")
        .add_message(Role::System, "framing")
        .add_message(Role::Assistant, "ack")
        .add_message(Role::User, "payload")
        .temperature(0.0);

    assert_eq!(request.model, "gpt-3.5-turbo");
    assert_eq!(request.messages.len(), 3);
    assert_eq!(request.messages[0].role, Role::System);
    assert_eq!(request.messages[1].role, Role::Assistant);
    assert_eq!(request.messages[2].role, Role::User);
    assert_eq!(request.temperature, Some(0.0));
}

#[test]
fn test_request_serialization_shouldUseLowercaseRoles() {
    let request = OpenAIRequest::new("gpt-3.5-turbo")
        .add_message(Role::System, "framing")
        .temperature(0.5);

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "model": "gpt-3.5-turbo",
            "messages": [{"role": "system", "content": "framing"}],
            "temperature": 0.5
        })
    );
}

#[test]
fn test_request_serialization_withoutTemperature_shouldSkipTheField() {
    let request = OpenAIRequest::new("gpt-3.5-turbo").add_message(Role::User, "hi");
    let value = serde_json::to_value(&request).unwrap();

    assert!(value.get("temperature").is_none());
}

#[test]
fn test_chat_message_helpers_shouldAssignTheRightRoles() {
    assert_eq!(ChatMessage::system("a").role, Role::System);
    assert_eq!(ChatMessage::assistant("b").role, Role::Assistant);
    assert_eq!(ChatMessage::user("c").role, Role::User);
}

#[test]
fn test_translation_messages_shouldEmbedChunkAndPosition() {
    let messages = build_translation_messages("<p>fragment</p>", 0, 2);

    assert_eq!(messages.len(), 3);
    assert!(messages[2].content.contains("part of the passage: 1 / 2"));
    assert!(messages[2].content.contains("```<p>fragment</p>```"));
}

#[tokio::test]
async fn test_mock_provider_shouldEchoTheEmbeddedChunk() {
    let mock = MockOpenAI::new();
    let request = OpenAIRequest::new("gpt-3.5-turbo")
        .with_messages(build_translation_messages("<p>echo me</p>", 0, 1));

    let response = mock.complete(request).await.unwrap();
    let text = MockOpenAI::extract_text(&response);

    assert_eq!(text, "```<p>echo me</p>```");
    assert_eq!(mock.tracker().lock().unwrap().call_count, 1);
}

#[tokio::test]
async fn test_mock_provider_withInjectedFailure_shouldReturnTheConfiguredError() {
    let mock = MockOpenAI::new();
    mock.fail_on_call(1, MockErrorType::Api);

    let request = OpenAIRequest::new("gpt-3.5-turbo")
        .with_messages(build_translation_messages("x", 0, 1));
    let result = mock.complete(request).await;

    assert!(matches!(
        result,
        Err(ProviderError::ApiError {
            status_code: 400,
            ..
        })
    ));
}
