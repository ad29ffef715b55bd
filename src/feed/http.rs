//! Feed fetched over HTTP.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{header, Client};

use super::{decode, FeedError, FeedSource};
use crate::models::RawFeedRecord;

/// Single GET of a remote feed document.
#[derive(Clone)]
pub struct HttpFeed {
    client: Client,
    url: String,
}

impl HttpFeed {
    pub fn new(url: &str, user_agent: &str, timeout: Duration) -> Result<Self, FeedError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    async fn fetch(&self) -> Result<Vec<RawFeedRecord>, FeedError> {
        let start = Instant::now();
        let response = self
            .client
            .get(&self.url)
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Feed request to {} returned {}", self.url, status);
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        tracing::debug!(
            "Fetched {} bytes from {} in {}ms",
            body.len(),
            self.url,
            start.elapsed().as_millis()
        );
        decode(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
