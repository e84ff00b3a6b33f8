use std::time::Duration;

use newsfeed_core::{Effect, FetchOutcome, Msg};
use newsfeed_engine::{EngineEvent, EngineHandle, FailureKind};
use newsfeed_logging::{feed_debug, feed_info, feed_warn};

/// Hands effects to the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchNews { generation, query } => {
                    feed_info!(
                        "FetchNews generation={} endpoint={}",
                        generation,
                        query.endpoint.path()
                    );
                    feed_debug!("Parameters: {:?}", query.params);
                    self.engine.fetch(generation, query);
                }
                Effect::ScheduleBannerDismiss { banner_id, after } => {
                    self.engine.dismiss_banner_after(banner_id, after);
                }
            }
        }
    }

    /// Next engine result as a message, waiting at most `wait`.
    pub fn next_msg(&self, wait: Duration) -> Option<Msg> {
        self.engine.recv_timeout(wait).map(event_to_msg)
    }
}

pub(crate) fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted { generation, result } => {
            let outcome = match result {
                Ok(response) => {
                    feed_info!(
                        "Request {} returned {} articles",
                        generation,
                        response.articles.len()
                    );
                    FetchOutcome::Articles(response.articles)
                }
                Err(err) => {
                    let class = match err.kind {
                        FailureKind::HttpStatus(_) => "transport error",
                        FailureKind::Api => "API error",
                        FailureKind::Network | FailureKind::Timeout => "network failure",
                        FailureKind::InvalidUrl
                        | FailureKind::TooLarge { .. }
                        | FailureKind::Decode => "bad response",
                    };
                    feed_warn!("Request {} failed ({}): {}", generation, class, err);
                    FetchOutcome::Failed
                }
            };
            Msg::FetchCompleted {
                generation,
                outcome,
            }
        }
        EngineEvent::BannerExpired { banner_id } => Msg::ErrorBannerExpired { banner_id },
    }
}
