pub(crate) mod orchestrator;
pub(crate) mod prompts;
pub(crate) mod summarizer;

pub(crate) use orchestrator::{Pipeline, Services, research};
pub(crate) use summarizer::SummaryFormat;
