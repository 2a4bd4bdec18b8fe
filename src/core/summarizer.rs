use serde::{Deserialize, Serialize};

use crate::{
    core::{Pipeline, prompts},
    error::LlmError,
    llm::{LlmProvider, ProviderRequest},
    models::{
        Briefing, SearchResult,
        briefing::{NO_SUMMARY, SUMMARY_ERROR},
        search_result::sources,
    },
    transformers::{parse_list, parse_points},
};

/// Shape the model is asked to answer in.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    /// One point per line, bullet markers stripped
    #[default]
    Lines,
    /// A JSON array of strings, parsed best effort
    List,
}

impl SummaryFormat {
    pub fn parse(&self, raw: &str) -> Vec<String> {
        match self {
            SummaryFormat::Lines => parse_points(raw),
            SummaryFormat::List => parse_list(raw),
        }
    }
}

/// Result of one summarization attempt.
#[derive(Debug)]
pub enum Outcome {
    /// The search returned nothing, the model was not asked
    NothingFound,
    Summarized(Vec<String>),
    /// The model answered but no usable point was left after parsing
    NoSummary,
    Failed(LlmError),
}

impl Outcome {
    /// Converts the outcome into the response shape. Sources are the links of
    /// `results` whatever the model did with them.
    pub fn into_briefing(self, pipeline: Pipeline, results: &[SearchResult]) -> Briefing {
        match self {
            Outcome::NothingFound => Briefing::sentinel(pipeline.nothing_found(), Vec::new()),
            Outcome::Summarized(summary) => Briefing {
                summary,
                sources: sources(results),
            },
            Outcome::NoSummary => Briefing::sentinel(NO_SUMMARY, sources(results)),
            Outcome::Failed(e) => {
                log::error!("LLM error during {} research: {}", pipeline, e);
                Briefing::sentinel(SUMMARY_ERROR, sources(results))
            }
        }
    }
}

pub(crate) struct Summarizer<'a> {
    pub llm: &'a dyn LlmProvider,
    pub temperature: f32,
    pub format: SummaryFormat,
}

impl Summarizer<'_> {
    pub async fn summarize(
        &self,
        pipeline: Pipeline,
        question: &str,
        results: &[SearchResult],
    ) -> Outcome {
        if results.is_empty() {
            return Outcome::NothingFound;
        }

        let context = pipeline.context(results);
        let prompt = prompts::build_prompt(pipeline, &context, question, self.format);

        let request = ProviderRequest {
            prompt: &prompt,
            temperature: self.temperature,
        };

        match self.llm.answer(&request).await {
            Ok(raw) => {
                let points = self.format.parse(&raw);
                log::info!(
                    "{} returned {} usable points for {} research",
                    self.llm.name(),
                    points.len(),
                    pipeline
                );
                if points.is_empty() {
                    log::debug!("Unusable LLM reply: {:?}", raw);
                    Outcome::NoSummary
                } else {
                    Outcome::Summarized(points)
                }
            }
            Err(e) => Outcome::Failed(e),
        }
    }
}
