use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::{ConfigOverrides, LlmOverrides, SerperOverrides, ServerOverrides},
    core::SummaryFormat,
    llm::LlmKind,
};

#[derive(Parser, Debug, Default)]
#[command(
    name = "briefer",
    about = "Summarize live web and news search results into short briefings"
)]
pub(crate) struct CliArgs {
    /// Interface to bind (default: 0.0.0.0)
    #[arg(long, env = "BRIEFER_HOST")]
    pub(crate) host: Option<String>,

    /// Port to bind (default: 5000)
    #[arg(short, long, env = "BRIEFER_PORT")]
    pub(crate) port: Option<u16>,

    /// Directory with the web frontend (default: "static")
    #[arg(long, env = "BRIEFER_STATIC_DIR")]
    pub(crate) static_dir: Option<PathBuf>,

    /// Open the frontend in a browser after startup
    #[arg(
        long,
        env = "BRIEFER_OPEN_BROWSER",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub(crate) open_browser: Option<bool>,

    /// Config file path (default: "config.toml")
    #[arg(short, long, env = "BRIEFER_CONFIG")]
    pub(crate) config: Option<String>,

    /// Serper API key
    #[arg(long, env = "SERPER_API_KEY", hide_env_values = true)]
    pub(crate) serper_api_key: Option<String>,

    /// Serper base URL (default: https://google.serper.dev)
    #[arg(long, env = "BRIEFER_SERPER_URL")]
    pub(crate) serper_url: Option<String>,

    /// Results requested per search (default: 5)
    #[arg(long, env = "BRIEFER_SEARCH_LIMIT")]
    pub(crate) search_limit: Option<usize>,

    /// Search timeout in sec (default: 10)
    #[arg(long, env = "BRIEFER_SEARCH_TIMEOUT")]
    pub(crate) search_timeout: Option<u64>,

    /// LLM provider (default: azure)
    #[arg(long, env = "BRIEFER_LLM_PROVIDER")]
    pub(crate) llm_provider: Option<LlmKind>,

    /// Azure OpenAI endpoint, or base URL of an OpenAI compatible API
    #[arg(long, env = "AZURE_OPENAI_ENDPOINT")]
    pub(crate) llm_endpoint: Option<String>,

    /// LLM API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub(crate) llm_api_key: Option<String>,

    /// Azure OpenAI API version
    #[arg(long, env = "OPENAI_API_VERSION")]
    pub(crate) llm_api_version: Option<String>,

    /// Model, or deployment name for Azure
    #[arg(long, env = "OPENAI_MODEL_NAME")]
    pub(crate) llm_model: Option<String>,

    /// Sampling temperature (default: 0)
    #[arg(long, env = "BRIEFER_TEMPERATURE")]
    pub(crate) temperature: Option<f32>,

    /// Ask the model for bullet lines or a JSON list (default: lines)
    #[arg(long, env = "BRIEFER_SUMMARY_FORMAT")]
    pub(crate) summary_format: Option<SummaryFormat>,
}

impl CliArgs {
    pub fn as_overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            server: ServerOverrides {
                host: self.host,
                port: self.port,
                static_dir: self.static_dir,
                open_browser: self.open_browser,
            },
            serper: SerperOverrides {
                api_key: self.serper_api_key,
                base_url: self.serper_url,
                limit: self.search_limit,
                timeout: self.search_timeout,
            },
            llm: LlmOverrides {
                provider: self.llm_provider,
                endpoint: self.llm_endpoint,
                api_key: self.llm_api_key,
                api_version: self.llm_api_version,
                model: self.llm_model,
                temperature: self.temperature,
                summary_format: self.summary_format,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_sections() {
        let args = CliArgs::try_parse_from([
            "briefer",
            "--port",
            "8080",
            "--serper-api-key",
            "serper-key",
            "--llm-provider",
            "openai",
            "--summary-format",
            "list",
        ])
        .unwrap();

        let overrides = args.as_overrides();
        assert_eq!(overrides.server.port, Some(8080));
        assert_eq!(overrides.serper.api_key.as_deref(), Some("serper-key"));
        assert_eq!(overrides.llm.provider, Some(LlmKind::OpenAi));
        assert_eq!(overrides.llm.summary_format, Some(SummaryFormat::List));
        assert_eq!(overrides.server.open_browser, None);
    }

    #[test]
    fn test_open_browser_flag() {
        let bare = CliArgs::try_parse_from(["briefer", "--open-browser"]).unwrap();
        assert_eq!(bare.open_browser, Some(true));

        let explicit = CliArgs::try_parse_from(["briefer", "--open-browser", "false"]).unwrap();
        assert_eq!(explicit.open_browser, Some(false));
    }
}
