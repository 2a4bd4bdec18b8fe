use std::path::PathBuf;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

const MAX_LOGGED_BODY: usize = 200;

/// Cuts a provider error body down to something fit for a log line.
pub(crate) fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_LOGGED_BODY).collect()
}

#[derive(Error, Debug)]
pub enum SearchError {
    /// The request never produced a response (timeout, dns, connection refused)
    #[error("Search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("Search provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body is not the expected json document
    #[error("Failed to parse search response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("LLM provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse LLM response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM response contained no choices")]
    Empty,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Cannot identify config file type of {0}. Must be .toml, .json or .yaml")]
    UnknownFormat(PathBuf),

    #[error("Invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("Missing configuration values: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Errors surfaced to http clients as `{"error": ...}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Query is required")]
    MissingQuery,

    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingQuery => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
