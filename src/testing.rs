//! Test doubles for the search and LLM seams.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::{
    core::{Services, SummaryFormat},
    engines::SearchEngine,
    error::{LlmError, SearchError},
    llm::{LlmProvider, ProviderRequest},
    models::SearchResult,
};

pub(crate) fn hit(title: &str, snippet: &str, link: &str) -> SearchResult {
    SearchResult {
        title: Some(title.to_string()),
        snippet: Some(snippet.to_string()),
        link: Some(link.to_string()),
        date: None,
    }
}

pub(crate) struct MockEngine {
    hits: Option<Vec<SearchResult>>,
    pub queries: Mutex<Vec<String>>,
}

impl MockEngine {
    pub fn with(hits: Vec<SearchResult>) -> Arc<Self> {
        Arc::new(Self {
            hits: Some(hits),
            queries: Mutex::default(),
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::with(Vec::new())
    }

    /// Every search fails with a provider error.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            hits: None,
            queries: Mutex::default(),
        })
    }
}

#[async_trait]
impl SearchEngine for MockEngine {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn limit(&self) -> usize {
        5
    }

    async fn search(&self, query: &str, _count: usize) -> Result<Vec<SearchResult>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.hits.clone().ok_or(SearchError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "upstream down".to_string(),
        })
    }
}

pub(crate) struct MockLlm {
    reply: Option<String>,
    pub calls: AtomicUsize,
    pub prompts: Mutex<Vec<String>>,
}

impl MockLlm {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::default(),
        })
    }

    /// Every call fails like a rate limited provider.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::default(),
        })
    }
}

#[async_trait]
impl LlmProvider for MockLlm {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn answer(&self, request: &ProviderRequest<'_>) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(request.prompt.to_string());
        self.reply.clone().ok_or(LlmError::Status {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            body: "Rate limit reached".to_string(),
        })
    }
}

pub(crate) fn services(web: Arc<MockEngine>, news: Arc<MockEngine>, llm: Arc<MockLlm>) -> Services {
    Services {
        web,
        news,
        llm,
        temperature: 0.0,
        format: SummaryFormat::Lines,
    }
}
