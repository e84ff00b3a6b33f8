/// The five user-selected filters.
///
/// Values are raw codes as they appear in the filter form. Nothing here is
/// validated: an unknown topic or country is sent to the API unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    topic: String,
    language: String,
    country: String,
    date_range: String,
    keywords: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            topic: "all".to_string(),
            language: "en".to_string(),
            country: "all".to_string(),
            date_range: "week".to_string(),
            keywords: String::new(),
        }
    }
}

impl FilterState {
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.set_topic(topic);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.set_language(language);
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.set_country(country);
        self
    }

    pub fn with_date_range(mut self, date_range: impl Into<String>) -> Self {
        self.set_date_range(date_range);
        self
    }

    pub fn with_keywords(mut self, keywords: impl AsRef<str>) -> Self {
        self.set_keywords(keywords);
        self
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn date_range(&self) -> &str {
        &self.date_range
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    /// True when a keyword search governs the query instead of the headline filters.
    pub fn is_search(&self) -> bool {
        !self.keywords.is_empty()
    }

    pub(crate) fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    pub(crate) fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub(crate) fn set_country(&mut self, country: impl Into<String>) {
        self.country = country.into();
    }

    pub(crate) fn set_date_range(&mut self, date_range: impl Into<String>) {
        self.date_range = date_range.into();
    }

    pub(crate) fn set_keywords(&mut self, keywords: impl AsRef<str>) {
        self.keywords = keywords.as_ref().trim().to_string();
    }
}
