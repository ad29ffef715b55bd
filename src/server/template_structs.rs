//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Askama provides compile-time verification that templates are valid.

use askama::Template;

use crate::dates::DayKey;
use crate::gallery::DaySlot;
use crate::models::FeedRecord;
use crate::services::video::is_youtube_url;

/// Content of the detail view for one record.
#[derive(Default)]
pub struct DetailContent {
    pub title: String,
    pub date_long: String,
    pub explanation: String,
    pub image_src: String,
    pub image_alt: String,
    pub is_video: bool,
    pub video_url: String,
    pub video_label: String,
}

impl DetailContent {
    pub fn from_record(record: &FeedRecord, fallback_image: &str) -> Self {
        Self {
            title: record.detail_title().to_string(),
            date_long: record.date.long_display(),
            explanation: record.explanation().to_string(),
            image_src: record.detail_image(fallback_image),
            image_alt: record.detail_alt(),
            is_video: record.is_video(),
            video_url: record.url.clone(),
            video_label: video_link_label(&record.url).to_string(),
        }
    }
}

fn video_link_label(url: &str) -> &'static str {
    if is_youtube_url(url) {
        "Watch on YouTube"
    } else {
        "Watch video"
    }
}

/// One gallery card: a record or a placeholder for a missing day.
pub struct CardRow {
    pub date_key: String,
    pub date_long: String,
    pub missing: bool,
    pub title: String,
    pub thumb_src: String,
    pub thumb_alt: String,
    pub is_video: bool,
    pub detail: DetailContent,
}

impl CardRow {
    pub fn from_slot(slot: &DaySlot<'_>, fallback_image: &str) -> Self {
        match slot {
            DaySlot::Present(record) => Self {
                date_key: record.date.to_string(),
                date_long: record.date.long_display(),
                missing: false,
                title: record.card_title().to_string(),
                thumb_src: record.card_image(fallback_image),
                thumb_alt: record.card_alt(),
                is_video: record.is_video(),
                detail: DetailContent::from_record(record, fallback_image),
            },
            DaySlot::Missing(day) => Self {
                date_key: day.to_string(),
                date_long: day.long_display(),
                missing: true,
                title: "—".to_string(),
                thumb_src: String::new(),
                thumb_alt: String::new(),
                is_video: false,
                detail: DetailContent::default(),
            },
        }
    }
}

/// Main gallery page.
#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate<'a> {
    pub title: &'a str,
    pub fact: String,
    pub min_date: String,
    pub max_date: String,
    pub start_value: String,
    pub end_value: String,
    pub cards: Vec<CardRow>,
    pub status_note: String,
    pub has_hint: bool,
    pub hint: String,
    pub has_notice: bool,
    pub notice: String,
}

/// Single-day detail page.
#[derive(Template)]
#[template(path = "day.html")]
pub struct DayTemplate<'a> {
    pub title: &'a str,
    pub detail: DetailContent,
    pub gallery_link: String,
    pub has_prev: bool,
    pub prev_key: String,
    pub has_next: bool,
    pub next_key: String,
}

impl DayTemplate<'_> {
    /// Link target for an adjacent day with a record, if any.
    pub fn neighbour(day: Option<DayKey>) -> (bool, String) {
        match day {
            Some(day) => (true, day.to_string()),
            None => (false, String::new()),
        }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub title: &'a str,
    pub message: &'a str,
}
