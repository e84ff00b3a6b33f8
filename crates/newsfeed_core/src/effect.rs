use std::time::Duration;

use crate::{BannerId, NewsQuery, RequestGeneration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchNews {
        generation: RequestGeneration,
        query: NewsQuery,
    },
    ScheduleBannerDismiss {
        banner_id: BannerId,
        after: Duration,
    },
}
