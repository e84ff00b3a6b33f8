use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use newsfeed_core::{BannerId, NewsQuery, RequestGeneration};
use newsfeed_logging::feed_debug;

use crate::{EngineEvent, NewsClient};

enum EngineCommand {
    Fetch {
        generation: RequestGeneration,
        query: NewsQuery,
    },
    DismissBannerAfter {
        banner_id: BannerId,
        after: Duration,
    },
}

/// Runs requests and timers on a background tokio runtime.
///
/// Commands are accepted from the UI thread; results come back as
/// [`EngineEvent`]s in completion order. In-flight requests are never cancelled.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(client: Arc<dyn NewsClient>) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
            feed_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch(&self, generation: RequestGeneration, query: NewsQuery) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch { generation, query });
    }

    pub fn dismiss_banner_after(&self, banner_id: BannerId, after: Duration) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::DismissBannerAfter { banner_id, after });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Waits up to `timeout` for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    client: &dyn NewsClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { generation, query } => {
            let result = client.fetch_news(&query).await;
            let _ = event_tx.send(EngineEvent::FetchCompleted { generation, result });
        }
        EngineCommand::DismissBannerAfter { banner_id, after } => {
            tokio::time::sleep(after).await;
            let _ = event_tx.send(EngineEvent::BannerExpired { banner_id });
        }
    }
}
