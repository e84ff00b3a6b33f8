use crate::FilterState;

/// Fixed page size sent as `max`. Nine fills a three-column grid.
pub const PAGE_SIZE: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Top headlines filtered by topic, country and date range.
    Headlines,
    /// Keyword search; the topic filter does not apply.
    Search,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Headlines => "/api/news",
            Endpoint::Search => "/api/search",
        }
    }
}

/// Endpoint plus ordered query parameters for one news request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub endpoint: Endpoint,
    pub params: Vec<(&'static str, String)>,
}

impl NewsQuery {
    /// Value of the first parameter named `name`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Maps the current filters to the request the backend expects.
///
/// `language` and `max` always come first. Search mode then adds `q`,
/// `dateRange`, `country`; headlines mode adds `topic`, `country`, `dateRange`.
pub fn build_query(filters: &FilterState) -> NewsQuery {
    let mut params = vec![
        ("language", filters.language().to_string()),
        ("max", PAGE_SIZE.to_string()),
    ];

    let endpoint = if filters.is_search() {
        params.push(("q", filters.keywords().to_string()));
        params.push(("dateRange", filters.date_range().to_string()));
        params.push(("country", filters.country().to_string()));
        Endpoint::Search
    } else {
        params.push(("topic", filters.topic().to_string()));
        params.push(("country", filters.country().to_string()));
        params.push(("dateRange", filters.date_range().to_string()));
        Endpoint::Headlines
    };

    NewsQuery { endpoint, params }
}

/// Title shown above the grid for the given filters.
pub fn page_heading(filters: &FilterState) -> String {
    if filters.is_search() {
        format!("Search Results for \"{}\"", filters.keywords())
    } else {
        "Trending News".to_string()
    }
}
