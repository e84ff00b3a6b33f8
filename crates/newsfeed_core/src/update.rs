use std::time::Duration;

use newsfeed_logging::feed_debug;

use crate::{build_query, AppState, Effect, FetchOutcome, Msg};

/// Text of the banner shown for any failed request.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load news. Please try again later.";

/// How long an error banner stays up.
pub const BANNER_DURATION: Duration = Duration::from_secs(5);

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TopicChanged(topic) => {
            state.filters_mut().set_topic(topic);
            Vec::new()
        }
        Msg::LanguageChanged(language) => {
            state.filters_mut().set_language(language);
            Vec::new()
        }
        Msg::CountryChanged(country) => {
            state.filters_mut().set_country(country);
            Vec::new()
        }
        Msg::DateRangeChanged(date_range) => {
            state.filters_mut().set_date_range(date_range);
            Vec::new()
        }
        Msg::KeywordsChanged(keywords) => {
            state.filters_mut().set_keywords(keywords);
            Vec::new()
        }
        Msg::ApplyFilters | Msg::KeywordsSubmitted | Msg::PageLoaded => {
            let query = build_query(state.filters());
            let generation = state.begin_request();
            vec![Effect::FetchNews { generation, query }]
        }
        Msg::FetchCompleted {
            generation,
            outcome,
        } => {
            if !state.is_latest(generation) {
                feed_debug!("Discarding response for superseded request {}", generation);
                return (state, Vec::new());
            }
            match outcome {
                FetchOutcome::Articles(articles) => {
                    state.show_articles(articles);
                    Vec::new()
                }
                FetchOutcome::Failed => {
                    let banner_id = state.show_error(LOAD_ERROR_MESSAGE);
                    state.show_articles(Vec::new());
                    vec![Effect::ScheduleBannerDismiss {
                        banner_id,
                        after: BANNER_DURATION,
                    }]
                }
            }
        }
        Msg::ErrorBannerExpired { banner_id } => {
            state.dismiss_banner(banner_id);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
