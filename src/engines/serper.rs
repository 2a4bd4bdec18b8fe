use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    config::SerperConfig,
    engines::SearchEngine,
    error::{SearchError, truncate_body},
    models::SearchResult,
};

/// Serper endpoint family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKind {
    /// `/search`, results under `organic`
    Web,
    /// `/news`, results under `news`, each with a date
    News,
}

impl SearchKind {
    fn path(&self) -> &'static str {
        match self {
            SearchKind::Web => "search",
            SearchKind::News => "news",
        }
    }
}

#[derive(Serialize)]
struct SerperRequest<'a> {
    q: &'a str,
    num: usize,
}

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Option<Vec<SerperItem>>,
    #[serde(default)]
    news: Option<Vec<SerperItem>>,
}

#[derive(Debug, Deserialize)]
struct SerperItem {
    title: Option<String>,
    snippet: Option<String>,
    link: Option<String>,
    date: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Serper {
    client: Client,
    kind: SearchKind,
    url: String,
    api_key: String,
    limit: usize,
}

impl Serper {
    pub(crate) fn new(kind: SearchKind, config: &SerperConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            kind,
            url: format!("{}/{}", config.base_url.trim_end_matches('/'), kind.path()),
            api_key: config.api_key.clone().unwrap_or_default(),
            limit: config.limit,
        })
    }

    fn parse_results(&self, body: &str) -> Result<Vec<SearchResult>, SearchError> {
        let response: SerperResponse = serde_json::from_str(body)?;

        let items = match self.kind {
            SearchKind::Web => response.organic,
            SearchKind::News => response.news,
        };

        Ok(items
            .unwrap_or_default()
            .into_iter()
            .map(|item| SearchResult {
                title: item.title,
                snippet: item.snippet,
                link: item.link,
                date: match self.kind {
                    SearchKind::Web => None,
                    SearchKind::News => item.date,
                },
            })
            .collect())
    }
}

#[async_trait]
impl SearchEngine for Serper {
    fn name(&self) -> &'static str {
        match self.kind {
            SearchKind::Web => "serper",
            SearchKind::News => "serper-news",
        }
    }

    fn limit(&self) -> usize {
        self.limit
    }

    async fn search(&self, query: &str, count: usize) -> Result<Vec<SearchResult>, SearchError> {
        let response = self
            .client
            .post(&self.url)
            .header("X-API-KEY", &self.api_key)
            .json(&SerperRequest { q: query, num: count })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SearchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        self.parse_results(&body)
    }
}
