use std::time::Duration;

use futures_util::StreamExt;
use newsfeed_core::NewsQuery;
use newsfeed_logging::{feed_debug, feed_info};
use url::Url;

use crate::{FailureKind, FetchError, NewsResponse};

/// Message used when the API reports failure without saying why.
pub const DEFAULT_API_ERROR: &str = "Failed to fetch news";

/// Transport settings. Timeouts are off unless set; a hung request then
/// stays pending until the transport gives up.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            request_timeout: None,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait NewsClient: Send + Sync {
    async fn fetch_news(&self, query: &NewsQuery) -> Result<NewsResponse, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestNewsClient {
    base_url: Url,
    client: reqwest::Client,
    settings: FetchSettings,
}

impl ReqwestNewsClient {
    /// Client for the API served at `base_url` (scheme, host and port; any path is replaced).
    pub fn new(base_url: &str, settings: FetchSettings) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::new(
                FailureKind::InvalidUrl,
                format!("{base_url} cannot be used as a base url"),
            ));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            base_url,
            client,
            settings,
        })
    }

    /// Full request URL for `query`, parameters form-encoded in order.
    pub fn request_url(&self, query: &NewsQuery) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(query.endpoint.path());
        url.set_query(None);
        url.set_fragment(None);
        url.query_pairs_mut().extend_pairs(
            query
                .params
                .iter()
                .map(|(name, value)| (*name, value.as_str())),
        );
        url
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl NewsClient for ReqwestNewsClient {
    async fn fetch_news(&self, query: &NewsQuery) -> Result<NewsResponse, FetchError> {
        let url = self.request_url(query);
        feed_info!("Fetching from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("HTTP error! status: {}", status.as_u16()),
            ));
        }

        let bytes = self.read_body(response).await?;
        let body: NewsResponse = serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

        if !body.success {
            let message = body
                .error
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| DEFAULT_API_ERROR.to_string());
            return Err(FetchError::new(FailureKind::Api, message));
        }

        feed_debug!(
            "API response: {} articles (total {:?})",
            body.articles.len(),
            body.total
        );
        Ok(body)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
