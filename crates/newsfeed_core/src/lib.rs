//! Newsfeed core: pure state machine, query building and view-model helpers.
mod article;
mod effect;
mod filters;
mod lookup;
mod msg;
mod query;
mod state;
mod time_label;
mod update;
mod view_model;

pub use article::Article;
pub use effect::Effect;
pub use filters::FilterState;
pub use lookup::{country_name, date_range_description, describe_filters, language_name};
pub use msg::{FetchOutcome, Msg};
pub use query::{build_query, page_heading, Endpoint, NewsQuery, PAGE_SIZE};
pub use state::{AppState, BannerId, ErrorBanner, RequestGeneration, ViewState};
pub use time_label::{format_published_at, parse_published_at, relative_time_label};
pub use update::{update, BANNER_DURATION, LOAD_ERROR_MESSAGE};
pub use view_model::{AppViewModel, CardView, FALLBACK_IMAGE_URL};
