//! Feed read from a local JSON file.

use std::path::PathBuf;

use async_trait::async_trait;
use url::Url;

use super::{decode, FeedError, FeedSource};
use crate::models::RawFeedRecord;

#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Accepts a `file://` URL or a path, expanding a leading `~`.
    pub fn from_location(location: &str) -> Result<Self, FeedError> {
        if location.starts_with("file://") {
            let path = Url::parse(location)
                .ok()
                .and_then(|url| url.to_file_path().ok())
                .ok_or_else(|| FeedError::InvalidLocation(location.to_string()))?;
            return Ok(Self::new(path));
        }
        if location.contains("://") {
            return Err(FeedError::InvalidLocation(location.to_string()));
        }
        let expanded = shellexpand::tilde(location);
        Ok(Self::new(expanded.as_ref()))
    }
}

#[async_trait]
impl FeedSource for FileFeed {
    async fn fetch(&self) -> Result<Vec<RawFeedRecord>, FeedError> {
        let body = tokio::fs::read(&self.path).await?;
        decode(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
