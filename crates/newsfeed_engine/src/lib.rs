//! Newsfeed engine: HTTP news client, request/timer execution and page snapshots.
mod engine;
mod fetch;
mod snapshot;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, NewsClient, ReqwestNewsClient, DEFAULT_API_ERROR};
pub use snapshot::{ensure_output_dir, SnapshotError, SnapshotWriter};
pub use types::{EngineEvent, FailureKind, FetchError, NewsResponse};
