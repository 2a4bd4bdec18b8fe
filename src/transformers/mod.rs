pub(crate) mod context;
pub(crate) mod text;

pub(crate) use context::{build_context, build_news_context};
pub(crate) use text::{lead_query, parse_list, parse_points};
