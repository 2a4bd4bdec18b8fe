use serde::Serialize;

pub const MAX_POINTS: usize = 5;

pub const NO_INFORMATION: &str = "No information found";
pub const NO_NEWS: &str = "No news found";
pub const NO_SUMMARY: &str = "No summary available";
pub const SUMMARY_ERROR: &str = "Error generating summary";

/// Response body of every research endpoint.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct Briefing {
    /// At most [`MAX_POINTS`] bullet points, or a single sentinel line
    pub summary: Vec<String>,
    /// Links of the search results the summary was built from
    pub sources: Vec<Option<String>>,
}

impl Briefing {
    pub fn sentinel(text: &str, sources: Vec<Option<String>>) -> Self {
        Self {
            summary: vec![text.to_string()],
            sources,
        }
    }
}
