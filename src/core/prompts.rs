use crate::core::{Pipeline, SummaryFormat};

/// Framing text of one pipeline's prompt.
pub(crate) struct PromptTemplate {
    pub intro: &'static str,
    pub task: &'static str,
    pub guidance: &'static [&'static str],
    pub label: &'static str,
}

static COMPANY: PromptTemplate = PromptTemplate {
    intro: "You are given web search results about a company.",
    task: "Create a concise summary using ONLY the information below.",
    guidance: &[
        "Focus on key facts about the company",
        "Use 3 to 5 bullet points",
        "Each point should be factual and concise",
    ],
    label: "Search Results:",
};

static NEWS: PromptTemplate = PromptTemplate {
    intro: "You are given recent news articles.",
    task: "Summarize the key trends and developments using ONLY the information below.",
    guidance: &[
        "Focus on trends and recent updates",
        "Use 3 to 5 bullet points",
        "Each point should be factual and concise",
    ],
    label: "News Data:",
};

static LEAD: PromptTemplate = PromptTemplate {
    intro: "You are given public web information about a person.",
    task: "Create a concise lead profile using ONLY the information below.",
    guidance: &[
        "Focus on name, role, company, and background",
        "Use 3 to 5 bullet points",
        "Do NOT add private or unverified information",
    ],
    label: "Data:",
};

const LINES_INSTRUCTIONS: &str = "Respond with each point on a new line.\nDo NOT number the points.";

const LIST_INSTRUCTIONS: &str = "Respond ONLY as a JSON array of strings.\nIf information is insufficient, return an empty array.\nExample:\n[\"Point 1\", \"Point 2\"]";

pub(crate) fn template(pipeline: Pipeline) -> &'static PromptTemplate {
    match pipeline {
        Pipeline::Company => &COMPANY,
        Pipeline::News => &NEWS,
        Pipeline::Lead => &LEAD,
    }
}

pub(crate) fn build_prompt(
    pipeline: Pipeline,
    context: &str,
    question: &str,
    format: SummaryFormat,
) -> String {
    let template = template(pipeline);
    let guidance = template
        .guidance
        .iter()
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    let instructions = match format {
        SummaryFormat::Lines => LINES_INSTRUCTIONS,
        SummaryFormat::List => LIST_INSTRUCTIONS,
    };

    format!(
        "{intro}\n\n{task}\n{guidance}\n\n{label}\n{context}\n\nQuestion: {question}\n\n{instructions}\n",
        intro = template.intro,
        task = template.task,
        label = template.label,
    )
}
