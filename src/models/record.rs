//! Feed record models.

use serde::{Deserialize, Serialize};

use crate::dates::DayKey;
use crate::services::video;

/// Media kind of a feed entry.
///
/// The feed only distinguishes `image` from everything else; any other value
/// is treated as a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    #[serde(other)]
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

/// A feed entry exactly as it appears on the wire.
///
/// Every field is optional so one incomplete entry cannot fail the whole
/// feed; [`RawFeedRecord::into_record`] applies the presence checks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFeedRecord {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub media_type: Option<MediaType>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub hdurl: Option<String>,
}

/// Why a wire entry was left out of the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingDate,
    InvalidDate(String),
    MissingUrl,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDate => write!(f, "missing date"),
            Self::InvalidDate(raw) => write!(f, "invalid date '{}'", raw),
            Self::MissingUrl => write!(f, "no url or hdurl"),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl RawFeedRecord {
    /// Apply presence checks and normalize the date.
    ///
    /// An entry needs a date and at least one of `url`/`hdurl`. When only
    /// `hdurl` is present it doubles as the card URL.
    pub fn into_record(self) -> Result<FeedRecord, SkipReason> {
        let raw_date = non_empty(self.date).ok_or(SkipReason::MissingDate)?;
        let date =
            DayKey::parse(&raw_date).map_err(|_| SkipReason::InvalidDate(raw_date.clone()))?;

        let hdurl = non_empty(self.hdurl);
        let url = non_empty(self.url)
            .or_else(|| hdurl.clone())
            .ok_or(SkipReason::MissingUrl)?;

        Ok(FeedRecord {
            date,
            title: non_empty(self.title),
            explanation: non_empty(self.explanation),
            media_type: self.media_type.unwrap_or(MediaType::Video),
            url,
            hdurl,
        })
    }
}

/// One day's entry in the loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedRecord {
    pub date: DayKey,
    pub title: Option<String>,
    pub explanation: Option<String>,
    pub media_type: MediaType,
    pub url: String,
    pub hdurl: Option<String>,
}

impl FeedRecord {
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    /// Title shown on cards.
    pub fn card_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Title shown in the detail view.
    pub fn detail_title(&self) -> &str {
        self.title.as_deref().unwrap_or("APOD")
    }

    pub fn explanation(&self) -> &str {
        self.explanation.as_deref().unwrap_or("")
    }

    /// Image used on the gallery card: the picture itself, or a video thumbnail.
    pub fn card_image(&self, fallback: &str) -> String {
        match self.media_type {
            MediaType::Image => self.url.clone(),
            MediaType::Video => video::thumbnail_url(&self.url, fallback),
        }
    }

    /// Image used in the detail view; prefers the high-resolution variant.
    pub fn detail_image(&self, fallback: &str) -> String {
        match self.media_type {
            MediaType::Image => self.hdurl.clone().unwrap_or_else(|| self.url.clone()),
            MediaType::Video => video::thumbnail_url(&self.url, fallback),
        }
    }

    pub fn card_alt(&self) -> String {
        match self.media_type {
            MediaType::Image => self
                .title
                .clone()
                .unwrap_or_else(|| "Astronomy Picture".to_string()),
            MediaType::Video => format!("{} (video)", self.video_label()),
        }
    }

    pub fn detail_alt(&self) -> String {
        match self.media_type {
            MediaType::Image => self
                .title
                .clone()
                .unwrap_or_else(|| "Astronomy Picture".to_string()),
            MediaType::Video => format!("{} thumbnail", self.video_label()),
        }
    }

    fn video_label(&self) -> &str {
        self.title.as_deref().unwrap_or("APOD video")
    }
}
