use async_trait::async_trait;
use reqwest::Client;

use super::{LlmProvider, ProviderRequest, chat};
use crate::error::LlmError;

pub struct AzureOpenAi {
    client: Client,
    endpoint: String,
    api_key: String,
    api_version: String,
    deployment: String,
}

impl AzureOpenAi {
    pub fn new(endpoint: String, api_key: String, api_version: String, deployment: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            api_version,
            deployment,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            self.endpoint.trim_end_matches('/'),
            self.deployment
        )
    }
}

#[async_trait]
impl LlmProvider for AzureOpenAi {
    fn name(&self) -> &'static str {
        "azure"
    }

    async fn answer(&self, request: &ProviderRequest<'_>) -> Result<String, LlmError> {
        log::debug!(
            "Sending {} byte prompt to Azure deployment {}",
            request.prompt.len(),
            self.deployment
        );

        // The deployment in the url selects the model
        let body = chat::ChatRequest::user(None, request.prompt, request.temperature);

        chat::complete(
            self.client
                .post(self.url())
                .query(&[("api-version", self.api_version.as_str())])
                .header("api-key", self.api_key.trim())
                .json(&body),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    use axum::{
        Json, Router,
        extract::{Query, State},
        http::{HeaderMap, StatusCode},
        routing::post,
    };
    use serde_json::{Value, json};

    use super::*;

    #[derive(Default)]
    struct Seen {
        api_version: Option<String>,
        api_key: Option<String>,
        body: Option<Value>,
    }

    async fn mock_azure(status: StatusCode, reply: Value) -> (String, Arc<Mutex<Seen>>) {
        let seen: Arc<Mutex<Seen>> = Arc::default();

        let handler = move |State(seen): State<Arc<Mutex<Seen>>>,
                            Query(query): Query<HashMap<String, String>>,
                            headers: HeaderMap,
                            Json(body): Json<Value>| async move {
            {
                let mut seen = seen.lock().unwrap();
                seen.api_version = query.get("api-version").cloned();
                seen.api_key = headers
                    .get("api-key")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                seen.body = Some(body);
            }
            (status, Json(reply))
        };

        let app = Router::new()
            .route(
                "/openai/deployments/gpt-test/chat/completions",
                post(handler),
            )
            .with_state(Arc::clone(&seen));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        (format!("http://{addr}/"), seen)
    }

    fn provider(endpoint: String) -> AzureOpenAi {
        AzureOpenAi::new(
            endpoint,
            "key-123".to_string(),
            "2024-02-01".to_string(),
            "gpt-test".to_string(),
        )
    }

    #[tokio::test]
    async fn test_answer_returns_first_choice() {
        let (endpoint, seen) = mock_azure(
            StatusCode::OK,
            json!({"choices": [
                {"message": {"role": "assistant", "content": "- one\n- two"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]}),
        )
        .await;

        let answer = provider(endpoint)
            .answer(&ProviderRequest {
                prompt: "Summarize",
                temperature: 0.0,
            })
            .await
            .unwrap();

        assert_eq!(answer, "- one\n- two");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.api_version.as_deref(), Some("2024-02-01"));
        assert_eq!(seen.api_key.as_deref(), Some("key-123"));
        let body = seen.body.as_ref().unwrap();
        assert!(body.get("model").is_none());
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Summarize");
    }

    #[tokio::test]
    async fn test_error_status() {
        let (endpoint, _) = mock_azure(
            StatusCode::TOO_MANY_REQUESTS,
            json!({"error": {"message": "Rate limit"}}),
        )
        .await;

        let result = provider(endpoint)
            .answer(&ProviderRequest {
                prompt: "Summarize",
                temperature: 0.0,
            })
            .await;

        match result {
            Err(LlmError::Status { status, body }) => {
                assert_eq!(status, reqwest::StatusCode::TOO_MANY_REQUESTS);
                assert!(body.contains("Rate limit"));
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_body_is_truncated() {
        let (endpoint, _) = mock_azure(
            StatusCode::BAD_REQUEST,
            json!({"error": {"message": "ä".repeat(400)}}),
        )
        .await;

        let result = provider(endpoint)
            .answer(&ProviderRequest {
                prompt: "Summarize",
                temperature: 0.0,
            })
            .await;

        match result {
            Err(LlmError::Status { status, body }) => {
                assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
                assert_eq!(body.chars().count(), 200);
                assert!(body.starts_with(r#"{"error""#));
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_no_choices() {
        let (endpoint, _) = mock_azure(StatusCode::OK, json!({"choices": []})).await;

        let result = provider(endpoint)
            .answer(&ProviderRequest {
                prompt: "Summarize",
                temperature: 0.0,
            })
            .await;

        assert!(matches!(result, Err(LlmError::Empty)));
    }

    #[tokio::test]
    async fn test_filtered_content_is_empty() {
        let (endpoint, _) = mock_azure(
            StatusCode::OK,
            json!({"choices": [{"message": {"role": "assistant", "content": null}}]}),
        )
        .await;

        let answer = provider(endpoint)
            .answer(&ProviderRequest {
                prompt: "Summarize",
                temperature: 0.0,
            })
            .await
            .unwrap();

        assert_eq!(answer, "");
    }
}
