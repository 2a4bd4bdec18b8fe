use serde_json::Value;

use crate::models::briefing::MAX_POINTS;

pub(crate) const EMAIL_SUFFIX: &str = "professional profile";
pub(crate) const NAME_SUFFIX: &str = "profile CEO founder";

const BULLETS: [char; 3] = ['-', '•', ' '];

/// Turns a lead lookup into a search query. Anything with an `@` is treated
/// as an email address, everything else as a person's name.
pub(crate) fn lead_query(query: &str) -> String {
    if query.contains('@') {
        format!("{} {}", query, EMAIL_SUFFIX)
    } else {
        format!("{} {}", query, NAME_SUFFIX)
    }
}

fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c: char| BULLETS.contains(&c)).trim()
}

/// Splits a free text reply into at most [`MAX_POINTS`] bullet points.
pub(crate) fn parse_points(raw: &str) -> Vec<String> {
    raw.trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("Question:"))
        .map(strip_bullet)
        .filter(|point| !point.is_empty())
        .take(MAX_POINTS)
        .map(str::to_string)
        .collect()
}

/// Reads a reply that should be a JSON array of strings. Code fences and
/// chatter around the array are tolerated, anything else yields no points.
pub(crate) fn parse_list(raw: &str) -> Vec<String> {
    let raw = raw.trim();

    let values = serde_json::from_str::<Vec<Value>>(raw)
        .ok()
        .or_else(|| {
            let start = raw.find('[')?;
            let end = raw.rfind(']')?;
            serde_json::from_str::<Vec<Value>>(raw.get(start..=end)?).ok()
        })
        .unwrap_or_default();

    values
        .iter()
        .filter_map(Value::as_str)
        .map(strip_bullet)
        .filter(|point| !point.is_empty())
        .take(MAX_POINTS)
        .map(str::to_string)
        .collect()
}
