use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ExtractError;
use crate::extractor::config::LlmConfig;

// Generic structure for OpenAI-compatible API chat messages
#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

// Generic structure for OpenAI-compatible API chat requests
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

// Generic structure for OpenAI-compatible API chat responses
#[derive(Deserialize, Debug)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
pub struct Choice {
    pub message: MessageContent,
}

#[derive(Deserialize, Debug)]
pub struct MessageContent {
    pub content: String,
}

/// Sends a single chat-completion request and returns the message content.
///
/// One bounded attempt: the client carries the configured timeout and no
/// retry is made on failure — the caller degrades to the fallback extractor
/// instead.
pub async fn request_completion(
    client: &Client,
    config: &LlmConfig,
    api_key: &str,
    prompt: &str,
) -> Result<String, ExtractError> {
    let request_body = ChatRequest {
        model: config.model.clone(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        temperature: config.temperature,
        max_tokens: config.max_tokens,
    };

    info!(
        "LLM request: model={}, url={}, prompt_len={}",
        config.model,
        config.endpoint,
        prompt.len()
    );
    let request_start = std::time::Instant::now();

    let response = client
        .post(&config.endpoint)
        .header(header::AUTHORIZATION, format!("Bearer {}", api_key))
        .header(header::CONTENT_TYPE, "application/json")
        .json(&request_body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ExtractError::Status(status.as_u16()));
    }

    let chat_response = response
        .json::<ChatResponse>()
        .await
        .map_err(|e| ExtractError::ResponseMalformed(e.to_string()))?;

    let content = chat_response
        .choices
        .first()
        .map(|choice| choice.message.content.trim().to_string())
        .ok_or_else(|| ExtractError::ResponseMalformed("no choices in response".to_string()))?;

    info!(
        "LLM response received in {}ms, content_len={}",
        request_start.elapsed().as_millis(),
        content.len()
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serialization() {
        let request = ChatRequest {
            model: "llama-3.1-70b-versatile".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "extract".to_string(),
            }],
            temperature: 0.1,
            max_tokens: 1000,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama-3.1-70b-versatile");
        assert_eq!(json["messages"][0]["role"], "user");
        assert!((json["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
        assert_eq!(json["max_tokens"], 1000);
    }

    #[test]
    fn test_chat_response_deserialization() {
        let body = r#"{"choices":[{"message":{"content":"[]","role":"assistant"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content, "[]");
    }

    #[test]
    fn test_chat_response_missing_content_field() {
        let body = r#"{"choices":[{"message":{"role":"assistant"}}]}"#;
        assert!(serde_json::from_str::<ChatResponse>(body).is_err());
    }
}
