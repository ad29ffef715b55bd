//! The loaded gallery: an immutable dataset plus its coverage bounds.
//!
//! A [`Gallery`] is produced once by the feed loader and then only read.
//! Rendering derives a [`Window`] from it per request and maps each day to a
//! record or a placeholder through [`DayIndex`].

mod index;
mod view;

pub use index::DayIndex;
pub use view::{coverage_note, status_note, DaySlot, SlotSummary, WindowSummary, WindowView};

use thiserror::Error;

use crate::dates::DayKey;
use crate::models::FeedRecord;
use crate::window::{Coverage, Window, WindowError};

/// Errors that can occur while assembling a gallery from records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("Feed contained no usable records")]
    Empty,

    #[error(transparent)]
    Window(#[from] WindowError),
}

/// Sorted feed records and the day range they cover.
#[derive(Debug, Clone)]
pub struct Gallery {
    records: Vec<FeedRecord>,
    coverage: Coverage,
}

impl Gallery {
    /// Build a gallery from records in feed order.
    ///
    /// Records are sorted ascending by date with a stable sort, so entries
    /// sharing a date keep their feed order. Duplicates are kept; lookups
    /// resolve them last-seen-wins.
    pub fn from_records(mut records: Vec<FeedRecord>) -> Result<Self, GalleryError> {
        records.sort_by_key(|record| record.date);

        let (first, last) = match (records.first(), records.last()) {
            (Some(first), Some(last)) => (first.date, last.date),
            _ => return Err(GalleryError::Empty),
        };
        let coverage = Coverage::new(first, last)?;

        Ok(Self { records, coverage })
    }

    pub fn records(&self) -> &[FeedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn coverage(&self) -> &Coverage {
        &self.coverage
    }

    /// Window for a request, clamped to coverage. `None` means the most
    /// recent nine days.
    pub fn window(&self, requested: Option<DayKey>) -> Result<Window, WindowError> {
        self.coverage.window(requested)
    }

    /// Window plus per-day lookup results.
    pub fn view(&self, requested: Option<DayKey>) -> Result<WindowView<'_>, WindowError> {
        let window = self.window(requested)?;
        Ok(WindowView::build(self, window, requested))
    }

    /// Record shown for `day`, if any.
    pub fn record(&self, day: DayKey) -> Option<&FeedRecord> {
        self.records.iter().rev().find(|record| record.date == day)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::dates::DayKey;
    use crate::models::{FeedRecord, MediaType};

    pub fn record(date: &str, title: &str) -> FeedRecord {
        FeedRecord {
            date: DayKey::parse(date).unwrap(),
            title: Some(title.to_string()),
            explanation: Some(format!("About {}", title)),
            media_type: MediaType::Image,
            url: format!("https://apod.example/{}.jpg", date),
            hdurl: None,
        }
    }

    /// One record per day of January 2020, optionally skipping some days.
    pub fn january(skip: &[u32]) -> Vec<FeedRecord> {
        (1..=31)
            .filter(|day| !skip.contains(day))
            .map(|day| {
                let date = format!("2020-01-{:02}", day);
                record(&date, &format!("Day {}", day))
            })
            .collect()
    }
}
