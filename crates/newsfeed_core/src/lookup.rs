//! Static display names for filter codes and the filter summary sentence.

use crate::FilterState;

const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("us", "United States"),
    ("uk", "United Kingdom"),
    ("ca", "Canada"),
    ("au", "Australia"),
    ("de", "Germany"),
    ("fr", "France"),
    ("jp", "Japan"),
];

const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
];

const DATE_RANGE_DESCRIPTIONS: &[(&str, &str)] = &[
    ("today", "today"),
    ("week", "the last 7 days"),
    ("month", "the last 30 days"),
    ("year", "the last 365 days"),
];

fn lookup(table: &[(&str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, name)| *name)
}

/// Country name for a code, or the code uppercased when unknown.
pub fn country_name(code: &str) -> String {
    lookup(COUNTRY_NAMES, code)
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| code.to_uppercase())
}

/// Language name for a code, or the code uppercased when unknown.
pub fn language_name(code: &str) -> String {
    lookup(LANGUAGE_NAMES, code)
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| code.to_uppercase())
}

/// Phrase for a date range code; unknown codes are returned as-is.
pub fn date_range_description(code: &str) -> String {
    lookup(DATE_RANGE_DESCRIPTIONS, code)
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| code.to_string())
}

/// Human-readable sentence describing what the current filters select.
pub fn describe_filters(filters: &FilterState) -> String {
    let category = if filters.topic() == "all" {
        ""
    } else {
        filters.topic()
    };
    let geography = if filters.country() == "all" {
        "worldwide".to_string()
    } else {
        format!("in {}", country_name(filters.country()))
    };
    let keywords = if filters.is_search() {
        format!(" containing the keywords \"{}\"", filters.keywords())
    } else {
        String::new()
    };

    format!(
        "Trending {category} news {geography} released within {range}, written in {language}{keywords}.",
        range = date_range_description(filters.date_range()),
        language = language_name(filters.language()),
    )
}
