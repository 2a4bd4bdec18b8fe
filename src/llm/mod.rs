use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{config::LlmConfig, error::LlmError};

mod azure;
mod chat;
mod openai;

pub use azure::AzureOpenAi;
pub use openai::OpenAi;

/// Trait implemented by concrete LLM providers.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn answer(&self, request: &ProviderRequest<'_>) -> Result<String, LlmError>;
}

/// Request envelope shared by the various providers.
pub struct ProviderRequest<'a> {
    pub prompt: &'a str,
    pub temperature: f32,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmKind {
    /// Azure OpenAI deployment
    #[default]
    Azure,
    /// Any OpenAI compatible chat completions endpoint
    #[value(name = "openai")]
    #[serde(rename = "openai")]
    OpenAi,
}

pub(crate) type SharedLlmProvider = Arc<dyn LlmProvider>;

pub(crate) fn from_config(config: &LlmConfig) -> SharedLlmProvider {
    let api_key = config.api_key.clone().unwrap_or_default();
    let model = config.model.clone().unwrap_or_default();

    match config.provider {
        LlmKind::Azure => Arc::new(AzureOpenAi::new(
            config.endpoint.clone().unwrap_or_default(),
            api_key,
            config.api_version.clone().unwrap_or_default(),
            model,
        )),
        LlmKind::OpenAi => Arc::new(OpenAi::new(
            config
                .endpoint
                .clone()
                .unwrap_or_else(|| openai::DEFAULT_BASE_URL.to_string()),
            api_key,
            model,
        )),
    }
}
