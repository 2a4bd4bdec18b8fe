/// One hit returned by a search engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Headline of the page or article
    pub title: Option<String>,
    /// Text excerpt shown by the provider
    pub snippet: Option<String>,
    /// Source url, copied verbatim into the briefing sources
    pub link: Option<String>,
    /// Publication date, only set for news hits
    pub date: Option<String>,
}

impl SearchResult {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn snippet(&self) -> &str {
        self.snippet.as_deref().unwrap_or_default()
    }

    pub fn link(&self) -> &str {
        self.link.as_deref().unwrap_or_default()
    }

    pub fn date(&self) -> &str {
        self.date.as_deref().unwrap_or_default()
    }
}

/// Links of every result in order, nulls included.
pub fn sources(results: &[SearchResult]) -> Vec<Option<String>> {
    results.iter().map(|result| result.link.clone()).collect()
}
