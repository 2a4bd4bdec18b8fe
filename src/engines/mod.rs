use std::sync::Arc;

use crate::{error::SearchError, models::SearchResult};
use async_trait::async_trait;

#[async_trait]
pub trait SearchEngine: Send + Sync {
    fn name(&self) -> &'static str;
    fn limit(&self) -> usize;

    async fn search(&self, query: &str, count: usize) -> Result<Vec<SearchResult>, SearchError>;

    /// Single attempt search that never fails. Errors are logged and turned
    /// into an empty result list.
    async fn search_or_empty(&self, query: &str) -> Vec<SearchResult> {
        log::info!("Searching {} for {:?}", self.name(), query);

        match self.search(query, self.limit()).await {
            Ok(hits) if hits.is_empty() => {
                log::info!("{} returned no hits for {:?}", self.name(), query);
                hits
            }
            Ok(hits) => {
                log::info!("Found {} hits from {}", hits.len(), self.name());
                hits
            }
            Err(SearchError::Status { status, body }) => {
                log::warn!(
                    "{} search failed with status {}: {}",
                    self.name(),
                    status,
                    body
                );
                Vec::new()
            }
            Err(e) => {
                log::error!("{} search error: {}", self.name(), e);
                Vec::new()
            }
        }
    }
}

pub mod serper;

pub use serper::{SearchKind, Serper};

pub(crate) type SharedSearchEngine = Arc<dyn SearchEngine>;
