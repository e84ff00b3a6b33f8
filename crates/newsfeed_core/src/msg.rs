use crate::{Article, BannerId, RequestGeneration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a topic.
    TopicChanged(String),
    /// User picked a language.
    LanguageChanged(String),
    /// User picked a country.
    CountryChanged(String),
    /// User picked a date range.
    DateRangeChanged(String),
    /// User edited the keyword box. The text is trimmed when stored.
    KeywordsChanged(String),
    /// User clicked Apply.
    ApplyFilters,
    /// User pressed Enter in the keyword box.
    KeywordsSubmitted,
    /// Initial load with the current filters.
    PageLoaded,
    /// The engine finished a request.
    FetchCompleted {
        generation: RequestGeneration,
        outcome: FetchOutcome,
    },
    /// Dismissal timer for an error banner fired.
    ErrorBannerExpired { banner_id: BannerId },
    /// Fallback for placeholder wiring.
    NoOp,
}

/// What the state machine needs to know about a finished request.
///
/// Failure details stay with the engine and the logs; the view only shows a
/// generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Articles(Vec<Article>),
    Failed,
}
