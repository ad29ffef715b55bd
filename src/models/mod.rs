//! Data models for the feed.

mod record;

pub use record::{FeedRecord, MediaType, RawFeedRecord, SkipReason};
