use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{LlmError, truncate_body};

#[derive(Serialize)]
pub(super) struct ChatRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<&'a str>,
    pub temperature: f32,
    pub messages: Vec<ChatMessage<'a>>,
}

impl<'a> ChatRequest<'a> {
    pub fn user(model: Option<&'a str>, prompt: &'a str, temperature: f32) -> Self {
        Self {
            model,
            temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        }
    }
}

#[derive(Serialize)]
pub(super) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    // null when the provider filtered the completion
    content: Option<String>,
}

/// Sends a prepared chat completion request and returns the first choice.
pub(super) async fn complete(request: RequestBuilder) -> Result<String, LlmError> {
    let response = request.send().await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(LlmError::Status {
            status,
            body: truncate_body(&body),
        });
    }

    let parsed: ChatResponse = serde_json::from_str(&body)?;

    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or(LlmError::Empty)
}
