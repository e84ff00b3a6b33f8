use chrono::{DateTime, NaiveDateTime, Utc};

/// Parses an API timestamp. Offsets are honoured; a timestamp without one is
/// read as UTC.
pub fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Coarse age of an article: `Just now`, `{N}h ago` or `{N}d ago`.
///
/// Hours and days are whole units, truncated. Timestamps in the future read
/// as `Just now`.
pub fn relative_time_label(published_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - published_at).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{}d ago", hours / 24)
    }
}

/// Relative label for a raw timestamp, or the raw text if it cannot be parsed.
pub fn format_published_at(raw: &str, now: DateTime<Utc>) -> String {
    match parse_published_at(raw) {
        Some(published_at) => relative_time_label(published_at, now),
        None => raw.to_string(),
    }
}
