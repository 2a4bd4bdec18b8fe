use crate::models::SearchResult;

/// Renders web hits as numbered `SOURCE n:` blocks for the prompt.
pub(crate) fn build_context(results: &[SearchResult]) -> String {
    let mut context = String::new();
    for (idx, result) in results.iter().enumerate() {
        context.push_str(&format!(
            "\nSOURCE {}:\nTitle: {}\nSnippet: {}\nURL: {}\n",
            idx + 1,
            result.title(),
            result.snippet(),
            result.link()
        ));
    }
    context.trim().to_string()
}

/// Same as [`build_context`] with a `Date:` line per article.
pub(crate) fn build_news_context(results: &[SearchResult]) -> String {
    let mut context = String::new();
    for (idx, result) in results.iter().enumerate() {
        context.push_str(&format!(
            "\nNEWS {}:\nTitle: {}\nSnippet: {}\nDate: {}\nURL: {}\n",
            idx + 1,
            result.title(),
            result.snippet(),
            result.date(),
            result.link()
        ));
    }
    context.trim().to_string()
}
