use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Format, Json, Serialized, Toml, Yaml},
};
use normalize_path::NormalizePath;
use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{cli::CliArgs, core::SummaryFormat, error::ConfigError, llm::LlmKind};

pub(crate) const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Directory served for every non api path
    pub static_dir: PathBuf,
    /// Open the index page in a browser once the server is up
    pub open_browser: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SerperConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    /// Results requested per search
    pub limit: usize,
    /// Request timeout in seconds
    pub timeout: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LlmConfig {
    pub provider: LlmKind,
    /// Azure resource endpoint, or the base url of an OpenAI compatible api
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    /// Azure only
    pub api_version: Option<String>,
    /// Model name, or deployment name for Azure
    pub model: Option<String>,
    pub temperature: f32,
    pub summary_format: SummaryFormat,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub serper: SerperConfig,
    pub llm: LlmConfig,
}

#[derive(Serialize, Debug, Default)]
pub(crate) struct ServerOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_browser: Option<bool>,
}

#[derive(Serialize, Debug, Default)]
pub(crate) struct SerperOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

#[derive(Serialize, Debug, Default)]
pub(crate) struct LlmOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<LlmKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_format: Option<SummaryFormat>,
}

/// Values taken from the command line and the environment. They win over
/// the config file.
#[derive(Serialize, Debug, Default)]
pub(crate) struct ConfigOverrides {
    pub server: ServerOverrides,
    pub serper: SerperOverrides,
    pub llm: LlmOverrides,
}

impl Config {
    /// Collects every required value that is missing or blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn blank(value: &Option<String>) -> bool {
            value.as_deref().is_none_or(|v| v.trim().is_empty())
        }

        let mut missing = Vec::new();

        if blank(&self.serper.api_key) {
            missing.push("serper.api_key (SERPER_API_KEY)");
        }
        if blank(&self.llm.api_key) {
            missing.push("llm.api_key (OPENAI_API_KEY)");
        }
        if blank(&self.llm.model) {
            missing.push("llm.model (OPENAI_MODEL_NAME)");
        }
        if self.llm.provider == LlmKind::Azure {
            if blank(&self.llm.endpoint) {
                missing.push("llm.endpoint (AZURE_OPENAI_ENDPOINT)");
            }
            if blank(&self.llm.api_version) {
                missing.push("llm.api_version (OPENAI_API_VERSION)");
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Missing(missing))
        }
    }
}

fn defaults() -> serde_json::Value {
    json!({
        "server": {
            "host": "0.0.0.0",
            "port": 5000,
            "static_dir": "static",
            "open_browser": false
        },
        "serper": {
            "base_url": "https://google.serper.dev",
            "limit": 5,
            "timeout": 10
        },
        "llm": {
            "provider": "azure",
            "temperature": 0.0,
            "summary_format": "lines"
        }
    })
}

fn merge_file(figment: Figment, config_path: &Path) -> Result<Figment, ConfigError> {
    match config_path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(figment.merge(Toml::file(config_path))),
        Some("json") => Ok(figment.merge(Json::file(config_path))),
        Some("yaml") | Some("yml") => Ok(figment.merge(Yaml::file(config_path))),
        _ => Err(ConfigError::UnknownFormat(config_path.to_path_buf())),
    }
}

fn extract(figment: Figment, overrides: ConfigOverrides) -> Result<Config, ConfigError> {
    let mut config: Config = figment
        .merge(Serialized::defaults(overrides))
        .extract()
        .map_err(Box::new)?;

    config.validate()?;
    config.server.static_dir = config.server.static_dir.resolve().normalize();

    Ok(config)
}

pub(crate) fn load_config(args: CliArgs) -> Result<Config, ConfigError> {
    let mut figment = Figment::new().merge(Serialized::defaults(defaults()));

    let config_path = PathBuf::from(
        args.config
            .clone()
            .unwrap_or(DEFAULT_CONFIG_PATH.to_string()),
    );

    if config_path.exists() {
        log::info!("Config file found: {}", config_path.display());
        figment = merge_file(figment, &config_path)?;
    } else if config_path.to_str() != Some(DEFAULT_CONFIG_PATH) {
        return Err(ConfigError::NotFound(config_path));
    }

    let config = extract(figment, args.as_overrides())?;

    log::debug!(
        "Loaded config: bind {}:{}, {:?} provider with model {:?}, {} results per search",
        config.server.host,
        config.server.port,
        config.llm.provider,
        config.llm.model,
        config.serper.limit
    );

    Ok(config)
}
