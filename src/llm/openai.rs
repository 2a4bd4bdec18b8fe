use async_trait::async_trait;
use reqwest::Client;

use super::{LlmProvider, ProviderRequest, chat};
use crate::error::LlmError;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAi {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAi {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAi {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn answer(&self, request: &ProviderRequest<'_>) -> Result<String, LlmError> {
        log::debug!(
            "Sending {} byte prompt to {}",
            request.prompt.len(),
            self.model
        );

        let body = chat::ChatRequest::user(
            Some(self.model.as_str()),
            request.prompt,
            request.temperature,
        );

        chat::complete(
            self.client
                .post(format!(
                    "{}/chat/completions",
                    self.base_url.trim_end_matches('/')
                ))
                .bearer_auth(self.api_key.trim())
                .json(&body),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, Router, extract::State, http::HeaderMap, routing::post};
    use serde_json::{Value, json};

    use super::*;

    type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    #[tokio::test]
    async fn test_answer_sends_model_and_bearer() {
        let seen: Seen = Arc::default();

        let app = Router::new()
            .route(
                "/v1/chat/completions",
                post(
                    |State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>| async move {
                        let auth = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        seen.lock().unwrap().push((auth, body));
                        Json(json!({"choices": [{"message": {"content": "Acme makes anvils"}}]}))
                    },
                ),
            )
            .with_state(Arc::clone(&seen));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let provider = OpenAi::new(
            format!("http://{addr}/v1"),
            " sk-test ".to_string(),
            "gpt-4o-mini".to_string(),
        );
        let answer = provider
            .answer(&ProviderRequest {
                prompt: "Who makes anvils?",
                temperature: 0.0,
            })
            .await
            .unwrap();

        assert_eq!(answer, "Acme makes anvils");

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].0.as_deref(), Some("Bearer sk-test"));
        assert_eq!(seen[0].1["model"], "gpt-4o-mini");
        assert_eq!(seen[0].1["temperature"].as_f64(), Some(0.0));
        assert!(seen[0].1.get("max_tokens").is_none());
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let app = Router::new().route("/chat/completions", post(|| async { "not json" }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let provider = OpenAi::new(
            format!("http://{addr}"),
            "sk-test".to_string(),
            "gpt-4o-mini".to_string(),
        );
        let result = provider
            .answer(&ProviderRequest {
                prompt: "Who makes anvils?",
                temperature: 0.0,
            })
            .await;

        assert!(matches!(result, Err(LlmError::Parse(_))));
    }
}
