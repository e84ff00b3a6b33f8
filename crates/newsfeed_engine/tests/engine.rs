use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use newsfeed_core::{build_query, FilterState, NewsQuery};
use newsfeed_engine::{EngineEvent, EngineHandle, FetchError, NewsClient, NewsResponse};

/// Answers every query with an empty successful response and records it.
#[derive(Default)]
struct RecordingClient {
    queries: Mutex<Vec<NewsQuery>>,
}

#[async_trait::async_trait]
impl NewsClient for RecordingClient {
    async fn fetch_news(&self, query: &NewsQuery) -> Result<NewsResponse, FetchError> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(NewsResponse {
            success: true,
            ..NewsResponse::default()
        })
    }
}

fn wait_for_event(engine: &EngineHandle) -> EngineEvent {
    engine
        .recv_timeout(Duration::from_secs(5))
        .expect("engine event")
}

#[test]
fn fetch_command_reports_completion_with_generation() {
    let client = Arc::new(RecordingClient::default());
    let engine = EngineHandle::new(client.clone()).unwrap();
    let query = build_query(&FilterState::default());

    engine.fetch(7, query.clone());

    match wait_for_event(&engine) {
        EngineEvent::FetchCompleted { generation, result } => {
            assert_eq!(generation, 7);
            assert!(result.unwrap().articles.is_empty());
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(client.queries.lock().unwrap().as_slice(), &[query]);
}

#[test]
fn banner_timer_fires_after_delay() {
    let engine = EngineHandle::new(Arc::new(RecordingClient::default())).unwrap();
    let started = Instant::now();

    engine.dismiss_banner_after(3, Duration::from_millis(100));

    assert!(engine.try_recv().is_none());
    assert_eq!(wait_for_event(&engine), EngineEvent::BannerExpired { banner_id: 3 });
    assert!(started.elapsed() >= Duration::from_millis(100));
}
