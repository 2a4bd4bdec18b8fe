use std::sync::Arc;

use anyhow::Result;

use crate::{
    config::Config,
    core::{SummaryFormat, summarizer::Summarizer},
    engines::{SearchKind, Serper, SharedSearchEngine},
    llm::{self, SharedLlmProvider},
    models::{
        Briefing, SearchResult,
        briefing::{NO_INFORMATION, NO_NEWS},
    },
    transformers::{build_context, build_news_context, lead_query},
};

#[derive(strum_macros::Display, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Pipeline {
    /// Company research over web results
    Company,
    /// Technology news over news results
    News,
    /// Person lookup over web results
    Lead,
}

impl Pipeline {
    /// Literal query sent to the search engine.
    pub fn search_query(&self, query: &str) -> String {
        match self {
            Pipeline::Lead => lead_query(query),
            Pipeline::Company | Pipeline::News => query.to_string(),
        }
    }

    pub fn context(&self, results: &[SearchResult]) -> String {
        match self {
            Pipeline::News => build_news_context(results),
            Pipeline::Company | Pipeline::Lead => build_context(results),
        }
    }

    pub fn nothing_found(&self) -> &'static str {
        match self {
            Pipeline::News => NO_NEWS,
            Pipeline::Company | Pipeline::Lead => NO_INFORMATION,
        }
    }

    fn engine<'a>(&self, services: &'a Services) -> &'a SharedSearchEngine {
        match self {
            Pipeline::News => &services.news,
            Pipeline::Company | Pipeline::Lead => &services.web,
        }
    }
}

/// Clients shared by every request. Built once at startup, never mutated.
#[derive(Clone)]
pub(crate) struct Services {
    pub web: SharedSearchEngine,
    pub news: SharedSearchEngine,
    pub llm: SharedLlmProvider,
    pub temperature: f32,
    pub format: SummaryFormat,
}

impl Services {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            web: Arc::new(Serper::new(SearchKind::Web, &config.serper)?),
            news: Arc::new(Serper::new(SearchKind::News, &config.serper)?),
            llm: llm::from_config(&config.llm),
            temperature: config.llm.temperature,
            format: config.llm.summary_format,
        })
    }
}

/// Runs one pipeline end to end. Never fails, degraded runs end in a
/// sentinel summary.
pub(crate) async fn research(pipeline: Pipeline, query: &str, services: &Services) -> Briefing {
    log::info!("Running {} research for {:?}", pipeline, query);

    let search_query = pipeline.search_query(query);
    let results = pipeline.engine(services).search_or_empty(&search_query).await;

    let summarizer = Summarizer {
        llm: services.llm.as_ref(),
        temperature: services.temperature,
        format: services.format,
    };

    summarizer
        .summarize(pipeline, query, &results)
        .await
        .into_briefing(pipeline, &results)
}
