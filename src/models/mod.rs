pub mod briefing;
pub mod search_result;

pub use briefing::Briefing;
pub use search_result::SearchResult;
