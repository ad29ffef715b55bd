//! Feed loading.
//!
//! The gallery is built from one JSON document: an array of daily entries.
//! It is fetched exactly once, either over HTTP or from a local file, and
//! turned into an immutable [`Gallery`].

mod file;
mod http;

pub use file::FileFeed;
pub use http::HttpFeed;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Settings;
use crate::gallery::{Gallery, GalleryError};
use crate::models::{FeedRecord, RawFeedRecord};

/// Errors that can occur while loading the feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed server returned HTTP {0}")]
    Status(u16),

    #[error("Failed to read feed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed feed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid feed location '{0}'")]
    InvalidLocation(String),

    #[error(transparent)]
    Gallery(#[from] GalleryError),
}

/// Where the feed document comes from.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch and decode the feed into wire records.
    async fn fetch(&self) -> Result<Vec<RawFeedRecord>, FeedError>;

    /// Human-readable location for logs and status output.
    fn describe(&self) -> String;
}

/// Pick a feed source for the configured location.
///
/// `http://` and `https://` locations are fetched over the network; `file://`
/// URLs and bare paths are read from disk.
pub fn source_for(settings: &Settings) -> Result<Box<dyn FeedSource>, FeedError> {
    let location = settings.feed.trim();
    if location.starts_with("http://") || location.starts_with("https://") {
        let feed = HttpFeed::new(location, &settings.user_agent, settings.timeout())?;
        return Ok(Box::new(feed));
    }
    if location.is_empty() {
        return Err(FeedError::InvalidLocation(settings.feed.clone()));
    }
    Ok(Box::new(FileFeed::from_location(location)?))
}

/// Decode a feed document into wire records.
///
/// The document must be a JSON array. Entries that aren't objects of the
/// expected shape are skipped rather than failing the whole feed.
pub fn decode(body: &[u8]) -> Result<Vec<RawFeedRecord>, FeedError> {
    let entries: Vec<serde_json::Value> = serde_json::from_slice(body)?;
    let total = entries.len();
    let records: Vec<RawFeedRecord> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();
    if records.len() < total {
        debug!("Skipped {} undecodable feed entries", total - records.len());
    }
    Ok(records)
}

/// Keep entries that pass presence checks, preserving feed order.
pub fn usable_records(raw: Vec<RawFeedRecord>) -> Vec<FeedRecord> {
    raw.into_iter()
        .filter_map(|entry| match entry.into_record() {
            Ok(record) => Some(record),
            Err(reason) => {
                debug!("Skipping feed entry: {}", reason);
                None
            }
        })
        .collect()
}

/// Fetch the feed once and build the gallery.
pub async fn load_gallery(source: &dyn FeedSource) -> Result<Gallery, FeedError> {
    info!("Loading feed from {}", source.describe());
    let raw = source.fetch().await?;
    let fetched = raw.len();

    let records = usable_records(raw);
    info!("Feed has {} entries, {} usable", fetched, records.len());

    let gallery = Gallery::from_records(records)?;
    info!(
        "Dataset coverage: {} → {}",
        gallery.coverage().min(),
        gallery.coverage().max()
    );
    Ok(gallery)
}
